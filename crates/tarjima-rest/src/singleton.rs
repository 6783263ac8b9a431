//! Write-boundary guard for one-row page records
//!
//! Home page, about page, contact page, and global settings each live in
//! exactly one row. That is a business rule enforced where writes enter
//! the system, not a data-model invariant and not the resolver's concern:
//! creation is allowed only while no row exists, deletion never is.

/// Guard for a record kind that must have exactly one row.
///
/// The storage layer owns the actual row count; the guard only encodes
/// the rule.
///
/// # Example
/// ```
/// use tarjima_rest::SingletonGuard;
///
/// const HOME_PAGE: SingletonGuard = SingletonGuard::new("home page");
///
/// assert!(HOME_PAGE.allow_create(0).is_ok());
/// assert!(HOME_PAGE.allow_create(1).is_err());
/// assert!(HOME_PAGE.allow_delete().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingletonGuard {
	kind: &'static str,
}

/// Rejected writes against a singleton record kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SingletonError {
	#[error("a '{kind}' record already exists")]
	AlreadyExists { kind: &'static str },

	#[error("'{kind}' records cannot be deleted")]
	DeleteForbidden { kind: &'static str },
}

impl SingletonGuard {
	pub const fn new(kind: &'static str) -> Self {
		Self { kind }
	}

	/// The record kind this guard protects.
	pub fn kind(&self) -> &'static str {
		self.kind
	}

	/// Creation is allowed only while no row exists.
	pub fn allow_create(&self, existing_rows: u64) -> Result<(), SingletonError> {
		if existing_rows == 0 {
			Ok(())
		} else {
			Err(SingletonError::AlreadyExists { kind: self.kind })
		}
	}

	/// The single row is never deletable.
	pub fn allow_delete(&self) -> Result<(), SingletonError> {
		Err(SingletonError::DeleteForbidden { kind: self.kind })
	}
}
