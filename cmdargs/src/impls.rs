/*!
Implementations of the [`parameter`][crate::parameter] traits for various
primitive and standard library types
 */

use std::path::PathBuf;

use crate::parameter::{ParsedValue, Value};

macro_rules! from_str {
    ($($type:ident $($(::$path:ident)+)?,)*) => {
        $(
            impl ParsedValue for $type $($(:: $path)+)? {}
        )*
    };
}

from_str! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    char,
    bool,

    core::net::Ipv4Addr,
    core::net::Ipv6Addr,
    core::net::IpAddr,
    core::net::SocketAddrV4,
    core::net::SocketAddrV6,
    core::net::SocketAddr,
}

/// Text accepts anything except the empty string.
impl Value for String {
    #[inline]
    fn from_arg(argument: &str) -> Option<Self> {
        match argument.is_empty() {
            true => None,
            false => Some(argument.to_owned()),
        }
    }
}

impl Value for PathBuf {
    #[inline]
    fn from_arg(argument: &str) -> Option<Self> {
        match argument.is_empty() {
            true => None,
            false => Some(PathBuf::from(argument)),
        }
    }
}
