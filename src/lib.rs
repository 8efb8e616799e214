//! Standalone encoding of `varbinary` parameter values for the MSSQL (TDS)
//! wire protocol.
//!
//! https://docs.microsoft.com/en-us/openspecs/windows_protocols/ms-tds/ce3183a6-9d89-47e8-a02f-de5a1a1303de

#[macro_use]
pub mod error;

mod encode;
mod io;
mod parameter;
mod var_binary;

pub use self::{
    encode::ProtocolEncode,
    error::{Error, Result},
    io::{BufExt, BufMutExt},
    parameter::{Parameter, ParameterValue},
    var_binary::VarBinary,
};
