use serde::de::DeserializeOwned;

/// Deserialize with JSON-path context in error messages. Used for the batch
/// config so a bad entry reports *which* field was wrong.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    #[test]
    fn error_reports_offending_path() {
        let src = r#"{ "files": [ { "input": "a.json", "output": "a.ts", "rootTypeName": 42 } ] }"#;
        let err = from_str_with_path::<GeneratorConfig>(src).unwrap_err();
        assert!(err.contains("files[0].rootTypeName"), "got: {err}");
    }
}
