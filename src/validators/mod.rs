pub mod field_validator;
pub mod header_validator;
pub mod row_validator;
