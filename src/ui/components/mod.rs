// SPDX-License-Identifier: MIT

//! Section views composed by the shell. Each exposes a `view` function that
//! renders from the model and returns the messages the interaction produced.

pub mod about;
pub mod contact_form;
pub mod hero;
pub mod projects;
