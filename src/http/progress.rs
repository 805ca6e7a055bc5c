//! Upload progress reporting.

use std::sync::Arc;

/// Bytes of the request body handed to the network so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: Option<u64>,
}

impl UploadProgress {
    /// Fraction in `0.0..=1.0`, when the total is known.
    pub fn fraction(&self) -> Option<f64> {
        match self.total {
            Some(0) => Some(1.0),
            Some(total) => Some(self.loaded as f64 / total as f64),
            None => None,
        }
    }
}

/// Called for every uploaded chunk.
pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        let p = UploadProgress { loaded: 25, total: Some(100) };
        assert_eq!(p.fraction(), Some(0.25));
        assert_eq!(UploadProgress { loaded: 0, total: Some(0) }.fraction(), Some(1.0));
        assert_eq!(UploadProgress { loaded: 10, total: None }.fraction(), None);
    }
}
