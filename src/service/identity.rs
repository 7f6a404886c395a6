//! Create-path identifier policy and path/body consistency checks.

use crate::error::AppError;
use crate::model::Document;

/// Random 128-bit (UUID v4) identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Give `doc` a fresh id when the caller left it empty. A supplied id is kept verbatim.
pub fn assign_id<T: Document>(doc: &mut T) {
    if doc.id().is_empty() {
        doc.set_id(new_id());
    }
}

/// Reject when an identifier taken from the path differs from the one in the body.
pub fn ensure_matching(field: &str, path_value: &str, body_value: &str) -> Result<(), AppError> {
    if path_value != body_value {
        return Err(AppError::InvalidArgument(format!(
            "{} in body ('{}') does not match {} in path ('{}')",
            field, body_value, field, path_value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Department;
    use std::collections::HashSet;

    #[test]
    fn empty_id_is_generated() {
        let mut d = Department {
            id: String::new(),
            name: "Chirurgia".into(),
        };
        assign_id(&mut d);
        assert!(uuid::Uuid::parse_str(&d.id).is_ok());
    }

    #[test]
    fn supplied_id_is_kept() {
        let mut d = Department {
            id: "dept-7".into(),
            name: "Chirurgia".into(),
        };
        assign_id(&mut d);
        assert_eq!(d.id, "dept-7");
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn mismatch_is_invalid_argument() {
        assert!(ensure_matching("room", "1", "1").is_ok());
        let err = ensure_matching("room", "1", "2").unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}
