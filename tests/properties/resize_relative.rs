//! Property tests: resizing keeps the reader's place.

use proptest::prelude::*;

use folio::{content, Config, PageShell, SectionId, Viewport};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After a resize the pinned story is at the same progress.
    #[test]
    fn property_resize_keeps_story_progress(
        fraction in 0.05f64..0.95,
        width in 480.0f64..2560.0,
        height in 480.0f64..1440.0,
    ) {
        let mut config = Config::default();
        config.particles.count = 0;
        let mut page = PageShell::new(content::builtin(), &config, Viewport::new(1440.0, 900.0));
        page.skip_intro();

        page.scroll_to(page.scroll_for(SectionId::About, fraction));
        page.settle();
        let before = page.about().progress();

        page.resize(width, height);
        page.settle();
        let after = page.about().progress();

        prop_assert!((before - after).abs() < 1e-6, "{} != {}", before, after);
        prop_assert!(page.scroll() <= page.max_scroll());
    }
}
