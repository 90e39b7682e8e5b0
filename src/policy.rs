//! Role-based authorization rules.
//!
//! Every rule takes the authenticated [`Actor`] and the ownership facts of the
//! target resource and returns `Forbidden` on violation. Handlers are expected
//! to resolve the resource first, so a missing resource surfaces as `NotFound`
//! rather than `Forbidden`.

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Candidate,
    Admin,
    Company,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Admin => "admin",
            Role::Company => "company",
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "candidate" => Ok(Role::Candidate),
            "admin" => Ok(Role::Admin),
            "company" => Ok(Role::Company),
            other => Err(Error::BadRequest(format!("Unknown role: {}", other))),
        }
    }
}

/// The authenticated caller, derived from validated token claims.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
    pub company_id: Option<Uuid>,
}

impl TryFrom<&Claims> for Actor {
    type Error = Error;

    fn try_from(claims: &Claims) -> Result<Self> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| Error::Unauthorized("Invalid token subject".to_string()))?;
        let role = claims
            .role
            .as_deref()
            .unwrap_or("")
            .parse()
            .map_err(|_| Error::Unauthorized("Invalid token role".to_string()))?;
        Ok(Actor {
            user_id,
            role,
            company_id: claims.company_id,
        })
    }
}

pub fn require_admin(actor: &Actor) -> Result<()> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Candidate | Role::Company => {
            Err(Error::Forbidden("Admin access required".to_string()))
        }
    }
}

/// Company callers must carry the company they belong to; returns it.
pub fn require_company(actor: &Actor) -> Result<Uuid> {
    match actor.role {
        Role::Company => actor
            .company_id
            .ok_or_else(|| Error::Forbidden("Caller is not linked to a company".to_string())),
        Role::Admin | Role::Candidate => {
            Err(Error::Forbidden("Company access required".to_string()))
        }
    }
}

/// A caller may act on a user-owned record if it is their own or they are admin.
pub fn require_self_or_admin(actor: &Actor, owner_user_id: Uuid) -> Result<()> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Candidate if actor.user_id == owner_user_id => Ok(()),
        Role::Candidate | Role::Company => Err(Error::Forbidden(
            "Not authorized to access this resource".to_string(),
        )),
    }
}

/// Interviews may be created by admins, or by a candidate for themselves.
pub fn can_create_interview(actor: &Actor, candidate_user_id: Uuid) -> Result<()> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Candidate if actor.user_id == candidate_user_id => Ok(()),
        Role::Candidate => Err(Error::Forbidden(
            "Candidates can only create interviews for themselves".to_string(),
        )),
        Role::Company => Err(Error::Forbidden(
            "Not authorized to create interviews".to_string(),
        )),
    }
}

/// Interviews are visible to the owning candidate, the company owning the
/// interviewed job, and admins.
pub fn can_view_interview(
    actor: &Actor,
    candidate_user_id: Uuid,
    job_company_id: Uuid,
) -> Result<()> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Candidate if actor.user_id == candidate_user_id => Ok(()),
        Role::Company if actor.company_id == Some(job_company_id) => Ok(()),
        Role::Candidate | Role::Company => Err(Error::Forbidden(
            "Not authorized to access this interview".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            role,
            company_id: None,
        }
    }

    #[test]
    fn admin_passes_every_gate() {
        let admin = actor(Role::Admin);
        assert!(require_admin(&admin).is_ok());
        assert!(require_self_or_admin(&admin, Uuid::new_v4()).is_ok());
        assert!(can_create_interview(&admin, Uuid::new_v4()).is_ok());
        assert!(can_view_interview(&admin, Uuid::new_v4(), Uuid::new_v4()).is_ok());
    }

    #[test]
    fn candidate_limited_to_own_records() {
        let candidate = actor(Role::Candidate);
        assert!(require_self_or_admin(&candidate, candidate.user_id).is_ok());
        assert!(matches!(
            require_self_or_admin(&candidate, Uuid::new_v4()),
            Err(Error::Forbidden(_))
        ));
        assert!(can_create_interview(&candidate, candidate.user_id).is_ok());
        assert!(matches!(
            can_create_interview(&candidate, Uuid::new_v4()),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn company_sees_only_owned_interviews() {
        let company_id = Uuid::new_v4();
        let mut company = actor(Role::Company);
        company.company_id = Some(company_id);

        assert!(can_view_interview(&company, Uuid::new_v4(), company_id).is_ok());
        assert!(matches!(
            can_view_interview(&company, Uuid::new_v4(), Uuid::new_v4()),
            Err(Error::Forbidden(_))
        ));
        assert_eq!(require_company(&company).unwrap(), company_id);
    }

    #[test]
    fn company_without_link_is_forbidden() {
        let company = actor(Role::Company);
        assert!(matches!(require_company(&company), Err(Error::Forbidden(_))));
    }

    #[test]
    fn non_admin_roles_fail_admin_gate() {
        assert!(matches!(
            require_admin(&actor(Role::Candidate)),
            Err(Error::Forbidden(_))
        ));
        assert!(matches!(
            require_admin(&actor(Role::Company)),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn role_parses_and_round_trips() {
        for role in [Role::Candidate, Role::Admin, Role::Company] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("recruiter".parse::<Role>().is_err());
    }
}
