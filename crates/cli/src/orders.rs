// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use pds_design::DifferenceSet;

pub fn execute() {
    println!("{:>5}  {:>5}  difference set", "order", "size");
    for set in DifferenceSet::all() {
        println!(
            "{:>5}  {:>5}  {:?}",
            set.order(),
            set.modulus(),
            set.elements()
        );
    }
}
