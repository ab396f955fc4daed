//! Response envelope tolerance.
//!
//! Some deployments return bare JSON (`[...]`, `{...}`), others wrap every
//! payload as `{ "data": ... }`. Both decode to the same value.

use serde::Deserialize;

/// A response body that may or may not be wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Bare(T),
    Enveloped { data: T },
}

impl<T> Payload<T> {
    /// Unwrap the envelope, if any.
    pub fn into_inner(self) -> T {
        match self {
            Self::Bare(value) | Self::Enveloped { data: value } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Course;

    const COURSE: &str = r#"{
        "course_id": 1,
        "course_name": "Algorithms",
        "sks": 3,
        "created_at": "2024-01-10T00:00:00Z"
    }"#;

    #[test]
    fn bare_list() {
        let json = format!("[{COURSE}]");
        let payload: Payload<Vec<Course>> = serde_json::from_str(&json).unwrap();
        assert_eq!(payload.into_inner().len(), 1);
    }

    #[test]
    fn enveloped_list() {
        let json = format!(r#"{{ "data": [{COURSE}] }}"#);
        let payload: Payload<Vec<Course>> = serde_json::from_str(&json).unwrap();
        let courses = payload.into_inner();
        assert_eq!(courses[0].course_name, "Algorithms");
    }

    #[test]
    fn empty_bare_list() {
        let payload: Payload<Vec<Course>> = serde_json::from_str("[]").unwrap();
        assert!(payload.into_inner().is_empty());
    }

    #[test]
    fn bare_and_enveloped_record() {
        let bare: Payload<Course> = serde_json::from_str(COURSE).unwrap();
        let wrapped: Payload<Course> =
            serde_json::from_str(&format!(r#"{{ "data": {COURSE} }}"#)).unwrap();
        assert_eq!(bare.into_inner(), wrapped.into_inner());
    }

    #[test]
    fn unrelated_shape_is_rejected() {
        let result = serde_json::from_str::<Payload<Vec<Course>>>(r#"{ "items": [] }"#);
        assert!(result.is_err());
    }
}
