use serde::de::DeserializeOwned;

/// Deserialize TOML with the offending key path in error messages.
pub fn from_toml_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = toml::Deserializer::new(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at key {path} → {}", err.into_inner()))
        }
    }
}

pub fn from_json_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}
