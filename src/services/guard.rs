// src/services/guard.rs

use crate::{common::error::AppError, models::auth::Role, services::session::Actor};

/// Verificação de perfil executada no início de cada operação mutadora.
///
/// - Sem IO
/// - Sem pânico
/// - Sem regra de negócio (checagem pura de política)
///
/// A checagem de perfil vem sempre ANTES da checagem de posse: quem não tem
/// o perfil exigido nunca descobre se teria passado na posse.
pub fn require_role(allowed: &[Role], actor: &Actor) -> Result<(), AppError> {
    if allowed.contains(&actor.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Acesso negado: seu perfil não permite esta operação.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> Actor {
        Actor { id: 1, role }
    }

    #[test]
    fn allows_listed_roles() {
        assert!(require_role(&[Role::Management], &actor(Role::Management)).is_ok());
        assert!(
            require_role(&[Role::Management, Role::Sales], &actor(Role::Sales)).is_ok()
        );
    }

    #[test]
    fn rejects_unlisted_roles() {
        let result = require_role(&[Role::Management], &actor(Role::Support));
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn empty_allow_list_rejects_everyone() {
        for role in [Role::Management, Role::Sales, Role::Support] {
            assert!(require_role(&[], &actor(role)).is_err());
        }
    }
}
