//! Builders for the alert headers a server attaches to its responses.
//!
//! These produce exactly what [`crate::http::AlertInterceptor`] consumes on
//! the client side. Entity alerts use keys of the form
//! `<app>.<entity>.<created|updated|deleted>`.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::alert::types::{AlertError, AlertHeaderNames, AlertResult};

fn header_value(header: &HeaderName, value: &str) -> AlertResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|source| AlertError::InvalidHeaderValue {
        header: header.clone(),
        source,
    })
}

/// Headers carrying a success alert `message` and its parameter.
pub fn create_alert(names: &AlertHeaderNames, message: &str, param: &str) -> AlertResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(names.alert.clone(), header_value(&names.alert, message)?);
    headers.insert(names.params.clone(), header_value(&names.params, param)?);
    Ok(headers)
}

fn entity_alert(
    names: &AlertHeaderNames,
    entity: &str,
    action: &str,
    param: &str,
) -> AlertResult<HeaderMap> {
    let key = format!("{}.{}.{}", names.app(), entity, action);
    create_alert(names, &key, param)
}

pub fn entity_creation_alert(names: &AlertHeaderNames, entity: &str, param: &str) -> AlertResult<HeaderMap> {
    entity_alert(names, entity, "created", param)
}

pub fn entity_update_alert(names: &AlertHeaderNames, entity: &str, param: &str) -> AlertResult<HeaderMap> {
    entity_alert(names, entity, "updated", param)
}

pub fn entity_deletion_alert(names: &AlertHeaderNames, entity: &str, param: &str) -> AlertResult<HeaderMap> {
    entity_alert(names, entity, "deleted", param)
}

/// Headers describing a failed operation on `entity`.
///
/// Sets `X-<app>-error` to `error.<error_key>` and the params header to the
/// entity name. The default message is only logged.
pub fn failure_alert(
    names: &AlertHeaderNames,
    entity: &str,
    error_key: &str,
    default_message: &str,
) -> AlertResult<HeaderMap> {
    tracing::error!(entity, error_key, "Entity creation failed, {}", default_message);

    let mut headers = HeaderMap::new();
    let error = format!("error.{}", error_key);
    headers.insert(names.error.clone(), header_value(&names.error, &error)?);
    headers.insert(names.params.clone(), header_value(&names.params, entity)?);
    Ok(headers)
}
