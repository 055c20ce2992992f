//! Mods command: decode modifier bitmasks.

use bestscan_core::mods;

pub fn format_line(mask: u32) -> String {
    format!("{}\t{}", mask, mods::decode(mask))
}

pub fn run(masks: &[u32]) {
    for &mask in masks {
        println!("{}", format_line(mask));
    }
}
