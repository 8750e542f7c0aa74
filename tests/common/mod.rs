#![allow(dead_code)]

use std::{
    net::TcpListener,
    time::Duration,
};

use kardia::{
    FieldKey,
    IntakeForm,
    PredictionClient,
};
use serde_json::{
    json,
    Value,
};
use url::Url;
use wiremock::MockServer;

pub const SAMPLE_PATIENT: [(FieldKey, &str); 13] = [
    (FieldKey::Age, "52"),
    (FieldKey::Sex, "1"),
    (FieldKey::Cp, "0"),
    (FieldKey::Trestbps, "120"),
    (FieldKey::Chol, "200"),
    (FieldKey::Fbs, "0"),
    (FieldKey::Restecg, "1"),
    (FieldKey::Thalach, "150"),
    (FieldKey::Exang, "0"),
    (FieldKey::Oldpeak, "1.2"),
    (FieldKey::Slope, "2"),
    (FieldKey::Ca, "0"),
    (FieldKey::Thal, "2"),
];

pub fn sample_body() -> Value {
    json!({ "features": [[52, 1, 0, 120, 200, 0, 1, 150, 0, 1.2, 2, 0, 2]] })
}

pub fn filled_form() -> IntakeForm {
    let mut form = IntakeForm::new();
    for (key, value) in SAMPLE_PATIENT {
        form.update_field(key, value);
    }
    form
}

pub fn client_for(server: &MockServer) -> PredictionClient {
    client_with_timeout(server, Some(Duration::from_secs(5)))
}

pub fn client_with_timeout(server: &MockServer, timeout: Option<Duration>) -> PredictionClient {
    let endpoint = Url::parse(&format!("{}/predict", server.uri())).unwrap();
    PredictionClient::new(endpoint, timeout).unwrap()
}

/// A client pointed at a local port nothing listens on.
pub fn unreachable_client() -> PredictionClient {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/predict")).unwrap();
    PredictionClient::new(endpoint, Some(Duration::from_secs(5))).unwrap()
}
