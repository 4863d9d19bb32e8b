use super::*;

mod percent_codec;
