//! Collection validation functions

/// Why a collection size was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    TooFew { min: usize },
    TooMany { max: usize },
}

/// Validates that a collection has between `min` and `max` items, inclusive
pub fn validate_count(len: usize, min: usize, max: usize) -> Result<(), CountError> {
    if len < min {
        Err(CountError::TooFew { min })
    } else if len > max {
        Err(CountError::TooMany { max })
    } else {
        Ok(())
    }
}
