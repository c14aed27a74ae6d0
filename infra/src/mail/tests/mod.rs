//! Tests for mail delivery implementations

use dc_core::services::mail::MailServiceTrait;
use dc_shared::config::{MailConfig, MailProvider};

use crate::mail::{
    create_mail_service, mask_email, HttpMailService, LogMailService, LOGIN_SUBJECT,
};
use crate::InfrastructureError;

#[test]
fn test_mask_email() {
    assert_eq!(mask_email("developer@example.com"), "d***@example.com");
    assert_eq!(mask_email("@example.com"), "***@example.com");
    assert_eq!(mask_email("no-at-sign"), "***");
}

#[tokio::test]
async fn test_log_mail_service_counts_notices() {
    let service = LogMailService::new("no-reply@devcal.local");

    service
        .send_registration_mail("dev@example.com", "dev")
        .await
        .unwrap();
    service.send_login_mail("dev@example.com", "dev").await.unwrap();

    assert_eq!(service.sent_count(), 2);
}

#[test]
fn test_http_mail_requires_relay_url() {
    let config = MailConfig {
        provider: MailProvider::Http,
        ..Default::default()
    };

    let result = HttpMailService::new(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_http_mail_message_shape() {
    let config = MailConfig {
        provider: MailProvider::Http,
        relay_url: Some("http://localhost:9999/send".to_string()),
        ..Default::default()
    };
    let service = HttpMailService::new(&config).unwrap();

    let message = service.message(LOGIN_SUBJECT, "dev@example.com", "dev");
    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json["from"], "no-reply@devcal.local");
    assert_eq!(json["to"], "dev@example.com");
    assert_eq!(json["subject"], LOGIN_SUBJECT);
    assert_eq!(json["username"], "dev");
}

#[tokio::test]
async fn test_http_mail_reports_unreachable_relay() {
    let config = MailConfig {
        provider: MailProvider::Http,
        // Port 9 (discard) is closed on test machines
        relay_url: Some("http://127.0.0.1:9/send".to_string()),
        timeout_seconds: 2,
        ..Default::default()
    };
    let service = HttpMailService::new(&config).unwrap();

    assert!(service.send_login_mail("dev@example.com", "dev").await.is_err());
}

#[tokio::test]
async fn test_factory_falls_back_to_log_without_relay() {
    let config = MailConfig {
        provider: MailProvider::Http,
        relay_url: None,
        ..Default::default()
    };

    let service = create_mail_service(&config);
    assert!(service
        .send_registration_mail("dev@example.com", "dev")
        .await
        .is_ok());
}
