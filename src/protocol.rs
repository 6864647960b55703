//!
//! Wire keys used when a publish request is flattened into HTTP form fields.
//!

/// Form-field keys of [`SendMessageRequestBody`](crate::message::SendMessageRequestBody).
pub struct SendMessageRequestBodyKey;

impl SendMessageRequestBodyKey {
    pub const TOPIC: &'static str = "topic";
    pub const BIZSEQNO: &'static str = "bizseqno";
    pub const UNIQUEID: &'static str = "uniqueid";
    pub const CONTENT: &'static str = "content";
    pub const TTL: &'static str = "ttl";
    pub const TAG: &'static str = "tag";
    pub const EXTFIELDS: &'static str = "extFields";
    pub const PRODUCERGROUP: &'static str = "producergroup";
}

/// Logical fields of a publish request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Topic,
    BizSeqNo,
    UniqueId,
    Content,
    Ttl,
    Tag,
    ExtFields,
    ProducerGroup,
}

impl FieldKey {
    pub const ALL: [FieldKey; 8] = [
        FieldKey::Topic,
        FieldKey::BizSeqNo,
        FieldKey::UniqueId,
        FieldKey::Content,
        FieldKey::Ttl,
        FieldKey::Tag,
        FieldKey::ExtFields,
        FieldKey::ProducerGroup,
    ];

    /// Key used for this field in the HTTP form body.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKey::Topic => SendMessageRequestBodyKey::TOPIC,
            FieldKey::BizSeqNo => SendMessageRequestBodyKey::BIZSEQNO,
            FieldKey::UniqueId => SendMessageRequestBodyKey::UNIQUEID,
            FieldKey::Content => SendMessageRequestBodyKey::CONTENT,
            FieldKey::Ttl => SendMessageRequestBodyKey::TTL,
            FieldKey::Tag => SendMessageRequestBodyKey::TAG,
            FieldKey::ExtFields => SendMessageRequestBodyKey::EXTFIELDS,
            FieldKey::ProducerGroup => SendMessageRequestBodyKey::PRODUCERGROUP,
        }
    }

    /// Reverse lookup. Matching is exact, so `"extfields"` is not a known key.
    pub fn from_wire(key: &str) -> Option<Self> {
        FieldKey::ALL.into_iter().find(|field| field.as_str() == key)
    }
}
