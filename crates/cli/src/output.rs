use crate::error::CliError;
use serde::Serialize;

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn print<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    println!("{}", render(value, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_export::RelationshipItemFields;

    #[test]
    fn test_render_compact() {
        let json = render(&RelationshipItemFields::none(), false).unwrap();
        assert!(json.starts_with("{\"includesTrackedEntity\":false"));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_render_pretty() {
        let json = render(&RelationshipItemFields::none(), true).unwrap();
        assert!(json.contains("\n  \"includesTrackedEntity\": false"));
    }
}
