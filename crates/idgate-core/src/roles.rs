//! Role classification
//!
//! Maps an authenticated principal to the coarse `Admin`/`User` role based
//! on a single configured admin entitlement.

use crate::prelude::*;

/// `Admin` iff `admin_entitlement` is one of the principal's entitlements
pub fn classify(principal: &Principal, admin_entitlement: &str) -> Role {
	if principal.has_entitlement(admin_entitlement) {
		Role::Admin
	} else {
		Role::User
	}
}


// vim: ts=4
