//! Building the logic statement model from parsed SQL segments.
//!
//! Parsed segments are handed to fillers one at a time, in the order the
//! parser discovered them. Each filler decides how its segment is folded into
//! the statement that routing and rewriting later operate on.
pub mod errors;
pub mod filler;
pub mod metadata;
pub mod segment;
pub mod statement;
pub mod table;
pub mod token;
