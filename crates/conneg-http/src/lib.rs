//! # conneg-http
//!
//! [`ClientInfo`] gathers what a server knows about the client of one
//! request: its negotiation preferences, network addresses, port and
//! User-Agent, with the agent decomposed lazily through a
//! [`conneg_agent::AgentResolver`].

pub mod client_info;

pub use client_info::ClientInfo;
