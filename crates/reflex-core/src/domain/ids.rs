//! Domain identifiers (strongly-typed IDs).
//!
//! ULID ベースの ID を Phantom type パターンで型ごとに分けています。
//! `AgentId` と `EpisodeId` は同じ表現ですが、混同するとコンパイルエラーになります。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"agent-", "episode-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Agent のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Agent {}

impl IdMarker for Agent {
    fn prefix() -> &'static str {
        "agent-"
    }
}

/// Episode のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Episode {}

impl IdMarker for Episode {
    fn prefix() -> &'static str {
        "episode-"
    }
}

/// Identifier of an agent (one program instance for its lifetime).
pub type AgentId = Id<Agent>;

/// Identifier of an episode (one run of an agent against an environment).
pub type EpisodeId = Id<Episode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_their_prefix() {
        let ulid = Ulid::new();
        let agent = AgentId::from_ulid(ulid);
        let episode: EpisodeId = ulid.into();

        assert_eq!(agent.as_ulid(), episode.as_ulid());
        assert_eq!(agent.to_string(), format!("agent-{ulid}"));
        assert_eq!(episode.to_string(), format!("episode-{ulid}"));
        // let _: AgentId = episode; // <- does not compile
    }

    #[test]
    fn ids_roundtrip_json() {
        let id = AgentId::from_ulid(Ulid::new());
        let s = serde_json::to_string(&id).unwrap();
        let back: AgentId = serde_json::from_str(&s).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;
        assert_eq!(size_of::<AgentId>(), size_of::<Ulid>());
    }
}
