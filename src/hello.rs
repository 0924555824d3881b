//! Handshake payload exchanged with the collector.
//!
//! The first payload on a fresh connection: agent version, a feature selector
//! word, and an ordered list of capability tokens the collector uses to
//! decide what the agent may be asked to do. Construct-or-load, inspect,
//! serialize — same lifecycle as [`crate::ErrorReport`].

use crate::codec;
use crate::error::{Error, Result};
use crate::proto;

#[derive(Debug)]
struct HelloInner {
    version: String,
    config: i32,
    cmd: Vec<String>,
}

/// Handshake value object.
#[derive(Debug)]
pub struct Hello {
    inner: Option<HelloInner>,
}

impl Hello {
    /// Creates a handshake payload. `version` is required non-empty; `config`
    /// is an opaque selector the collector interprets.
    pub fn new(version: impl Into<String>, config: i32) -> Result<Self> {
        let version = version.into();
        if version.is_empty() {
            return Err(Error::InvalidArgument("hello version must not be empty"));
        }
        Ok(Hello {
            inner: Some(HelloInner {
                version,
                config,
                cmd: Vec::new(),
            }),
        })
    }

    /// Reconstructs a handshake payload from its serialized form.
    pub fn load(buf: &[u8]) -> Result<Self> {
        let message: proto::Hello = codec::decode(buf)?;
        let mut hello = Hello::new(message.version, message.config)?;
        for part in message.cmd {
            hello.add_cmd_part(part)?;
        }
        Ok(hello)
    }

    /// Returns the agent version string.
    pub fn version(&self) -> Result<&str> {
        Ok(&self.inner()?.version)
    }

    /// Returns the feature selector word.
    pub fn config(&self) -> Result<i32> {
        Ok(self.inner()?.config)
    }

    /// Returns the number of capability tokens.
    pub fn cmd_length(&self) -> Result<u32> {
        Ok(self.inner()?.cmd.len() as u32)
    }

    /// Appends a capability token. Tokens are ordered and append-only.
    pub fn add_cmd_part(&mut self, part: impl Into<String>) -> Result<()> {
        self.inner_mut()?.cmd.push(part.into());
        Ok(())
    }

    /// Returns the capability token at `offset`.
    ///
    /// Fails with [`Error::NotFound`] if `offset` is past the end.
    pub fn cmd_get(&self, offset: u32) -> Result<&str> {
        self.inner()?
            .cmd
            .get(offset as usize)
            .map(String::as_str)
            .ok_or(Error::NotFound { index: offset })
    }

    /// Encodes the handshake payload and consumes it.
    pub fn serialize(&mut self) -> Result<Vec<u8>> {
        let inner = self
            .inner
            .take()
            .ok_or(Error::UseAfterSerialize { entity: "Hello" })?;
        codec::encode(&proto::Hello {
            version: inner.version,
            config: inner.config,
            cmd: inner.cmd,
        })
    }

    fn inner(&self) -> Result<&HelloInner> {
        self.inner
            .as_ref()
            .ok_or(Error::UseAfterSerialize { entity: "Hello" })
    }

    fn inner_mut(&mut self) -> Result<&mut HelloInner> {
        self.inner
            .as_mut()
            .ok_or(Error::UseAfterSerialize { entity: "Hello" })
    }
}
