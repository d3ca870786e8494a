// SPDX-License-Identifier: MIT

//! Domain models: contact-message validation and static portfolio data.

pub mod contact;
pub mod project;
