//! Embedded word list
//!
//! Compiled into the binary at build time from `data/words_es.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
