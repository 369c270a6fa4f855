mod mocks;

use mocks::RecordingTransport;
use pingdom_users::{ApiError, Contact, Flag, Method, Params, User, UsersClient, ValidationError};

fn sms_contact() -> Contact {
    Contact {
        severity: "HIGH".to_string(),
        provider: "nexmo".to_string(),
        ..Contact::sms("46", "5551234")
    }
}

#[test]
fn test_list_users() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    let body = client.list_users().unwrap();
    assert_eq!(body, r#"{"message":"ok"}"#);

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/users");
    assert!(request.params.is_empty());
}

#[test]
fn test_create_user() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    client.create_user(&User::new("Jane Doe")).unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/users");
    assert_eq!(request.params.to_query_string(), "name=Jane%20Doe");
}

#[test]
fn test_create_user_rejects_empty_username() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    let result = client.create_user(&User::default());
    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::EmptyUsername))
    ));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_update_user() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    let user = User {
        paused: Flag::True,
        ..User::new("bob")
    };
    client.update_user(12345, &user).unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/users/12345");
    let expected: Params = [("name", "bob"), ("paused", "true")].into_iter().collect();
    assert_eq!(request.params, expected);
}

#[test]
fn test_update_user_rejects_empty_username() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    let user = User {
        primary: Flag::True,
        ..User::default()
    };
    assert!(client.update_user(1, &user).is_err());
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_delete_user() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    client.delete_user(42).unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/users/42");
    assert!(request.params.is_empty());
}

#[test]
fn test_create_contact() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    client.create_contact(42, &sms_contact()).unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/users/42");
    assert_eq!(
        request.params.to_query_string(),
        "number=5551234&countrycode=46&severitylevel=HIGH&provider=nexmo"
    );
}

#[test]
fn test_update_contact() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    client
        .update_contact(42, 7, &Contact::email("ops@example.com"))
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/users/42/7");
    assert_eq!(request.params.get("email"), Some("ops@example.com"));
    assert_eq!(request.params.len(), 1);
}

#[test]
fn test_contact_validation_errors_stop_the_request() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    let missing_country_code = Contact {
        number: "5551234".to_string(),
        ..Default::default()
    };
    let result = client.create_contact(42, &missing_country_code);
    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::MissingCountryCode))
    ));

    let provider_only = Contact {
        provider: "nexmo".to_string(),
        ..Contact::email("ops@example.com")
    };
    let result = client.update_contact(42, 7, &provider_only);
    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::ProviderWithoutNumber))
    ));

    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_delete_contact() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    client.delete_contact(42, 7).unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/users/42/7");
}

#[test]
fn test_transport_errors_are_returned() {
    let transport = RecordingTransport::failing("connection refused");
    let client = UsersClient::new(transport.clone());

    let result = client.create_contact(42, &Contact::email("ops@example.com"));
    match result {
        Err(ApiError::Transport(message)) => assert_eq!(message, "connection refused"),
        other => panic!("Expected Transport error, got: {:?}", other),
    }
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_requests_keep_call_order() {
    let transport = RecordingTransport::new();
    let client = UsersClient::new(transport.clone());

    client.create_user(&User::new("bob")).unwrap();
    client.create_contact(1, &Contact::email("bob@example.com")).unwrap();
    client.delete_user(1).unwrap();

    let methods: Vec<Method> = transport.requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![Method::Post, Method::Post, Method::Delete]);
}
