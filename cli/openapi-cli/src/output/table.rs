// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output

use comfy_table::{Table, presets::NOTHING};

/// Create a borderless table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

/// Print a table to stdout
pub fn print_table(table: Table) {
    println!("{table}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_align_without_borders() {
        let mut table = create_table(&["ID", "NAME"]);
        table.add_row(vec!["urn:vcloud:gateway:1", "gw-a"]);
        table.add_row(vec!["2", "gw-long-name"]);

        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(!rendered.contains('|'));
        assert!(!rendered.contains('+'));

        let name_col = lines[0].find("NAME").unwrap();
        assert_eq!(lines[1].find("gw-a"), Some(name_col));
        assert_eq!(lines[2].find("gw-long-name"), Some(name_col));
    }
}
