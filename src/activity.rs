// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Activity Stream notification attributes.
//!
//! Flattens the recognized fields of a decoded Activity Stream message
//! into named attributes a routing pipeline can match on, without caring
//! about the rest of the notification body.

use serde_json::Value;
use std::collections::HashMap;

pub const ACTIVITY_STREAM_ID: &str = "ActivityStreamId";
pub const ACTIVITY_STREAM_TYPE: &str = "ActivityStreamType";
pub const ACTIVITY_STREAM_NAME: &str = "ActivityStreamName";
pub const ACTIVITY_STREAM_ACTOR: &str = "ActivityStreamActor";
pub const ACTIVITY_STREAM_INBOX: &str = "ActivityStreamInbox";
pub const ACTIVITY_STREAM_OBJECT_ID: &str = "ActivityStreamObjectId";
pub const ACTIVITY_STREAM_OBJECT_TYPE: &str = "ActivityStreamObjectType";

const OBJECT: &str = "object";
const ID: &str = "id";
const TYPE: &str = "type";
const NAME: &str = "name";
const ACTOR: &str = "actor";
const INBOX: &str = "inbox";

/// Extract the recognized fields of an Activity Stream message.
///
/// A field is copied only when its value is a string or a list of
/// strings; any other shape omits the attribute. A body that is not a
/// JSON object yields an empty map.
pub fn extract_headers(body: &Value) -> HashMap<&'static str, Value> {
    let mut headers = HashMap::new();

    set_header(&mut headers, ACTIVITY_STREAM_ID, body.get(ID));
    set_header(&mut headers, ACTIVITY_STREAM_TYPE, body.get(TYPE));
    set_header(&mut headers, ACTIVITY_STREAM_NAME, body.get(NAME));
    set_header(&mut headers, ACTIVITY_STREAM_ACTOR, body.get(ACTOR));
    set_header(&mut headers, ACTIVITY_STREAM_INBOX, body.get(INBOX));

    if let Some(object) = body.get(OBJECT).filter(|value| value.is_object()) {
        set_header(&mut headers, ACTIVITY_STREAM_OBJECT_ID, object.get(ID));
        set_header(&mut headers, ACTIVITY_STREAM_OBJECT_TYPE, object.get(TYPE));
    }

    headers
}

fn set_header(
    headers: &mut HashMap<&'static str, Value>,
    header: &'static str,
    value: Option<&Value>,
) {
    if let Some(value) = value {
        if is_text(value) {
            headers.insert(header, value.clone());
        }
    }
}

fn is_text(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Array(items) => items.iter().all(Value::is_string),
        _ => false,
    }
}
