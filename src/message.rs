use crate::error::ClientError;
use crate::form;
use crate::protocol::FieldKey;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Request body of an HTTP publish call.
///
/// Every field is optional from the envelope's point of view; checking that a topic is present or
/// that `ttl` is numeric is left to the layer that builds the request.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct SendMessageRequestBody {
    /// Destination topic of the message.
    #[serde(default)]
    topic: String,

    /// Business sequence number, opaque to the client. Brokers use it for idempotence and tracing.
    #[serde(default, rename = "bizseqno")]
    biz_seq_no: String,

    #[serde(default, rename = "uniqueid")]
    unique_id: String,

    /// Time-to-live in milliseconds, kept as a numeric string.
    #[serde(default)]
    ttl: String,

    #[serde(default)]
    content: String,

    #[serde(default)]
    tag: String,

    /// User defined key-value pairs carried along with the message.
    #[serde(default, rename = "extFields")]
    ext_fields: HashMap<String, String>,

    #[serde(default, rename = "producergroup")]
    producer_group: String,
}

impl SendMessageRequestBody {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn topic(&self) -> &str {
        self.topic.as_str()
    }

    pub fn set_topic(&mut self, topic: &str) {
        self.topic = topic.to_owned();
    }

    pub fn biz_seq_no(&self) -> &str {
        self.biz_seq_no.as_str()
    }

    pub fn set_biz_seq_no(&mut self, biz_seq_no: &str) {
        self.biz_seq_no = biz_seq_no.to_owned();
    }

    pub fn unique_id(&self) -> &str {
        self.unique_id.as_str()
    }

    pub fn set_unique_id(&mut self, unique_id: &str) {
        self.unique_id = unique_id.to_owned();
    }

    pub fn ttl(&self) -> &str {
        self.ttl.as_str()
    }

    pub fn set_ttl(&mut self, ttl: &str) {
        self.ttl = ttl.to_owned();
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_owned();
    }

    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.tag = tag.to_owned();
    }

    pub fn ext_fields(&self) -> &HashMap<String, String> {
        &self.ext_fields
    }

    /// Replace the extension bag with a copy of `ext_fields`.
    ///
    /// Later changes to the caller's map are not observed by this body, and vice versa.
    pub fn set_ext_fields(&mut self, ext_fields: &HashMap<String, String>) {
        self.ext_fields = ext_fields.clone();
    }

    pub fn put_ext_field(&mut self, key: &str, value: &str) {
        self.ext_fields.insert(key.to_owned(), value.to_owned());
    }

    pub fn producer_group(&self) -> &str {
        self.producer_group.as_str()
    }

    pub fn set_producer_group(&mut self, producer_group: &str) {
        self.producer_group = producer_group.to_owned();
    }

    /// Build a body from decoded form fields.
    ///
    /// Missing keys leave the corresponding field empty and unknown keys are skipped.
    ///
    /// # Errors
    /// Raise ClientError::InvalidExtFields if `extFields` is present, non-empty and not a JSON object of strings.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ClientError> {
        let mut body = SendMessageRequestBody::new();
        for (key, value) in fields {
            match FieldKey::from_wire(key) {
                Some(FieldKey::Topic) => body.set_topic(value),
                Some(FieldKey::BizSeqNo) => body.set_biz_seq_no(value),
                Some(FieldKey::UniqueId) => body.set_unique_id(value),
                Some(FieldKey::Content) => body.set_content(value),
                Some(FieldKey::Ttl) => body.set_ttl(value),
                Some(FieldKey::Tag) => body.set_tag(value),
                Some(FieldKey::ProducerGroup) => body.set_producer_group(value),
                Some(FieldKey::ExtFields) => {
                    if !value.is_empty() {
                        body.ext_fields = serde_json::from_str(value)?;
                    }
                }
                None => debug!(key = %key, "Skip unknown form field"),
            }
        }
        Ok(body)
    }

    /// Encode as an `application/x-www-form-urlencoded` body with keys in [`FieldKey::ALL`] order.
    pub fn to_form_body(&self) -> Bytes {
        let ext_fields = self.ext_fields_json();
        form::encode(FieldKey::ALL.iter().map(|key| {
            let value = match key {
                FieldKey::ExtFields => ext_fields.as_str(),
                _ => self.scalar(*key),
            };
            (key.as_str(), value)
        }))
    }

    pub fn from_form_body(src: &[u8]) -> Result<Self, ClientError> {
        let fields = form::parse(src)?;
        SendMessageRequestBody::from_fields(&fields)
    }

    fn scalar(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Topic => self.topic(),
            FieldKey::BizSeqNo => self.biz_seq_no(),
            FieldKey::UniqueId => self.unique_id(),
            FieldKey::Content => self.content(),
            FieldKey::Ttl => self.ttl(),
            FieldKey::Tag => self.tag(),
            FieldKey::ProducerGroup => self.producer_group(),
            FieldKey::ExtFields => "",
        }
    }

    // Serializing a map of strings does not fail in practice.
    fn ext_fields_json(&self) -> String {
        serde_json::to_string(&self.ext_fields).unwrap_or_else(|e| {
            warn!("Failed to JSON serialize extFields. Cause: {}", e);
            String::from("{}")
        })
    }
}

impl From<&SendMessageRequestBody> for HashMap<String, String> {
    fn from(body: &SendMessageRequestBody) -> HashMap<String, String> {
        let mut map = HashMap::with_capacity(FieldKey::ALL.len());
        for key in FieldKey::ALL {
            let value = match key {
                FieldKey::ExtFields => body.ext_fields_json(),
                _ => body.scalar(key).to_owned(),
            };
            map.insert(key.as_str().to_owned(), value);
        }
        map
    }
}

impl From<SendMessageRequestBody> for HashMap<String, String> {
    fn from(body: SendMessageRequestBody) -> HashMap<String, String> {
        HashMap::from(&body)
    }
}

impl TryFrom<HashMap<String, String>> for SendMessageRequestBody {
    type Error = ClientError;

    fn try_from(fields: HashMap<String, String>) -> Result<Self, Self::Error> {
        SendMessageRequestBody::from_fields(&fields)
    }
}
