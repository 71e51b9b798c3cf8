//! Project-scoped authorization rules.
//!
//! Two levels exist:
//!
//! - **access**: read and contribute to a project's tasks and discussions.
//!   Granted to the owner and to every member.
//! - **manage**: edit project fields, add members, delete the project.
//!   Granted to the owner only.
//!
//! The owner is always authorized, even when absent from the member set.
//! These are pure predicates; callers must check that the project exists
//! before asking, so "not found" is always reported ahead of "not allowed".

use crate::error::CoreError;
use crate::types::DbId;

/// Anything that carries a project's owner and member list.
pub trait ProjectScope {
    fn owner_id(&self) -> DbId;
    fn member_ids(&self) -> &[DbId];
}

/// `true` if `caller` owns the project or is one of its members.
pub fn can_access<P: ProjectScope + ?Sized>(caller: DbId, project: &P) -> bool {
    caller == project.owner_id() || project.member_ids().contains(&caller)
}

/// `true` if `caller` owns the project.
pub fn can_manage<P: ProjectScope + ?Sized>(caller: DbId, project: &P) -> bool {
    caller == project.owner_id()
}

/// Fail with [`CoreError::Forbidden`] unless `caller` may access the project.
///
/// `action` completes the sentence "Not authorized to ...".
pub fn ensure_access<P: ProjectScope + ?Sized>(
    caller: DbId,
    project: &P,
    action: &str,
) -> Result<(), CoreError> {
    if can_access(caller, project) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!("Not authorized to {action}")))
    }
}

/// Fail with [`CoreError::Forbidden`] unless `caller` owns the project.
pub fn ensure_manage<P: ProjectScope + ?Sized>(
    caller: DbId,
    project: &P,
    action: &str,
) -> Result<(), CoreError> {
    if can_manage(caller, project) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!("Not authorized to {action}")))
    }
}
