//! Property tests for the FAQ accordion.

use proptest::prelude::*;

use folio::sections::Accordion;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: At most one entry is open, and it is the one a simple model predicts.
    #[test]
    fn property_accordion_single_open(
        len in 0usize..8,
        clicks in proptest::collection::vec(0usize..10, 0..40),
    ) {
        let mut accordion = Accordion::new(len);
        let mut model = if len > 0 { Some(0) } else { None };

        for index in clicks {
            accordion.toggle(index);
            if index < len {
                model = if model == Some(index) { None } else { Some(index) };
            }

            let open = (0..len).filter(|&i| accordion.is_open(i)).count();
            prop_assert!(open <= 1);
            prop_assert_eq!(accordion.open_index(), model);
        }
    }

    /// PROPERTY: Clicking the same entry twice restores the previous state.
    #[test]
    fn property_double_toggle_is_identity(
        len in 1usize..8,
        setup in proptest::collection::vec(0usize..8, 0..10),
        index in 0usize..8,
    ) {
        let mut accordion = Accordion::new(len);
        for i in setup {
            accordion.toggle(i);
        }
        let before = accordion;
        accordion.toggle(index);
        accordion.toggle(index);
        prop_assert_eq!(accordion, before);
    }
}
