// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Property-based tests of the line classifier.
// Soak: PROPTEST_CASES=10000 cargo test --release

use arinc424::{classify, ClassificationKind};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn short_lines_are_too_short(line in ".{0,5}") {
        let record = classify(&line);

        prop_assert_eq!(record.kind, ClassificationKind::TooShort);
        prop_assert_eq!(record.customer_code, "");
        prop_assert_eq!(record.section_code, None);
        prop_assert_eq!(record.subsection_code, None);
    }

    #[test]
    fn unmarked_lines_are_non_standard(line in "[^S].{5,40}") {
        let record = classify(&line);
        let chars: Vec<char> = line.chars().collect();

        prop_assert_eq!(record.kind, ClassificationKind::NonStandard);
        prop_assert_eq!(record.customer_code, "");
        prop_assert_eq!(record.section_code, Some(chars[4]));
        prop_assert_eq!(record.subsection_code, Some(chars[5]));
    }

    #[test]
    fn standard_lines_carry_customer_code(line in "S.{5,40}") {
        let record = classify(&line);
        let customer_code: String = line.chars().skip(1).take(3).collect();

        prop_assert_eq!(record.customer_code, customer_code.as_str());
        prop_assert_ne!(record.kind, ClassificationKind::TooShort);
        prop_assert_ne!(record.kind, ClassificationKind::NonStandard);
    }

    #[test]
    fn classification_is_total_and_deterministic(line in any::<String>()) {
        let record = classify(&line);
        prop_assert_eq!(record, classify(&line));

        let too_short = record.kind == ClassificationKind::TooShort;
        prop_assert_eq!(too_short, line.chars().count() < 6);
        prop_assert_eq!(too_short, record.section_code.is_none());
        prop_assert_eq!(too_short, record.subsection_code.is_none());

        let non_standard = record.kind == ClassificationKind::NonStandard;
        prop_assert_eq!(record.customer_code.is_empty(), too_short || non_standard);
    }
}
