//! Diesel schema for task persistence.
//!
//! Matching DDL:
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     description TEXT,
//!     completed BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Required task name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Completion flag.
        completed -> Bool,
    }
}
