//! This crate provides the request body used to publish messages to [Apache EventMesh](https://eventmesh.apache.org)
//! over HTTP, together with the form-field keys brokers expect.
pub mod error;
pub mod form;
pub mod message;
pub mod protocol;
