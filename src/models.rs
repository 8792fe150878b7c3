// src/models.rs
use crate::errors::CalcError;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a `/math` request, e.g. `{"op": "+", "left": 2, "right": 3}`.
///
/// Decoding is lenient: keys match case-insensitively, missing or `null`
/// fields keep their zero value, unknown keys are skipped and a repeated
/// key overwrites the earlier one.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct MathRequest {
    pub op: String,
    pub left: f64,
    pub right: f64,
}

impl MathRequest {
    /// Decodes the first JSON value in `body`. Anything after it is ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_slice(body);
        MathRequest::deserialize(&mut de)
    }
}

impl<'de> Deserialize<'de> for MathRequest {
    fn deserialize<D>(d: D) -> Result<MathRequest, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;

        impl<'de2> Visitor<'de2> for V {
            type Value = MathRequest;

            fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
                fmt.write_str("a math request object")
            }

            // A bare `null` decodes to the zero request.
            fn visit_unit<E>(self) -> Result<MathRequest, E>
            where
                E: de::Error,
            {
                Ok(MathRequest::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<MathRequest, A::Error>
            where
                A: MapAccess<'de2>,
            {
                let mut req = MathRequest::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "op" => {
                            if let Some(op) = map.next_value::<Option<String>>()? {
                                req.op = op;
                            }
                        }
                        "left" => {
                            if let Some(left) = map.next_value::<Option<f64>>()? {
                                req.left = left;
                            }
                        }
                        "right" => {
                            if let Some(right) = map.next_value::<Option<f64>>()? {
                                req.right = right;
                            }
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(req)
            }
        }

        d.deserialize_any(V)
    }
}

/// Body of a `/math` response. An empty `error` means `result` is the answer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MathResponse {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub result: f64,
}

impl MathResponse {
    pub fn success(result: f64) -> Self {
        Self {
            error: String::new(),
            result,
        }
    }

    pub fn failure(err: &CalcError) -> Self {
        Self {
            error: err.to_string(),
            result: 0.0,
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

impl From<Result<f64, CalcError>> for MathResponse {
    fn from(outcome: Result<f64, CalcError>) -> Self {
        match outcome {
            Ok(result) => MathResponse::success(result),
            Err(e) => MathResponse::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_empty_error() {
        let body = serde_json::to_value(MathResponse::success(5.0)).unwrap();
        assert_eq!(body["error"], "");
        assert_eq!(body["result"].as_f64(), Some(5.0));
    }

    #[test]
    fn test_failure_keeps_zero_result() {
        let resp = MathResponse::from(Err::<f64, _>(CalcError::DivisionByZero));
        assert!(resp.is_error());
        assert_eq!(resp.error, "Division by 0");
        assert_eq!(resp.result, 0.0);

        let body = serde_json::to_string(&resp).unwrap();
        let decoded: MathResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, resp);
    }

    #[test]
    fn test_request_missing_and_null_fields_default_to_zero() {
        let missing = MathRequest::from_body(br#"{"op": "+", "left": 1}"#).unwrap();
        assert_eq!(missing.left, 1.0);
        assert_eq!(missing.right, 0.0);

        let nulls = MathRequest::from_body(br#"{"op": null, "left": 4, "right": null}"#).unwrap();
        assert_eq!(nulls.op, "");
        assert_eq!(nulls.left, 4.0);
        assert_eq!(nulls.right, 0.0);

        assert_eq!(MathRequest::from_body(b"null").unwrap(), MathRequest::default());
        assert_eq!(MathRequest::from_body(b"{}").unwrap(), MathRequest::default());
    }

    #[test]
    fn test_request_keys_are_case_insensitive() {
        let req = MathRequest::from_body(br#"{"OP": "*", "Left": 1.5, "RIGHT": 2}"#).unwrap();
        assert_eq!(req, MathRequest { op: "*".to_string(), left: 1.5, right: 2.0 });

        // Later keys win, and a null does not clear an earlier value.
        let req = MathRequest::from_body(br#"{"left": 1, "Left": 3, "left": null}"#).unwrap();
        assert_eq!(req.left, 3.0);
    }

    #[test]
    fn test_request_ignores_unknown_keys_and_trailing_data() {
        let req = MathRequest::from_body(
            br#"{"op": "-", "left": 9, "right": 2, "note": {"nested": [1, 2]}} {} trailing"#,
        )
        .unwrap();
        assert_eq!(req, MathRequest { op: "-".to_string(), left: 9.0, right: 2.0 });
    }

    #[test]
    fn test_request_rejects_bad_input() {
        let bodies: [&[u8]; 7] = [
            b"",
            b"   ",
            b"not json",
            b"42",
            b"[1, 2]",
            br#"{"left": "1"}"#,
            br#"{"op": 7}"#,
        ];
        for body in bodies {
            assert!(MathRequest::from_body(body).is_err(), "{:?}", String::from_utf8_lossy(body));
        }
    }
}
