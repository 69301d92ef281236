//! Property tests: settled scrubbed sections depend only on the scroll offset.

use proptest::prelude::*;

use folio::{content, Config, PageShell, SectionId, Viewport};

fn page() -> PageShell {
    let mut config = Config::default();
    config.particles.count = 0;
    let mut page = PageShell::new(content::builtin(), &config, Viewport::new(1440.0, 900.0));
    page.skip_intro();
    page
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any scroll history settles to the same frame as jumping straight there.
    #[test]
    fn property_scrub_ignores_history(
        history in proptest::collection::vec((0.0f64..1.0, 0.0f64..0.5), 0..12),
        last in 0.0f64..1.0,
    ) {
        let mut wandering = page();
        let max = wandering.max_scroll();
        for (fraction, dt) in history {
            wandering.scroll_to(fraction * max);
            wandering.tick(dt);
        }
        wandering.scroll_to(last * max);
        wandering.settle();

        let mut direct = page();
        direct.scroll_to(last * max);
        direct.settle();

        for id in [SectionId::About, SectionId::Projects] {
            prop_assert_eq!(wandering.section_frame(id), direct.section_frame(id));
        }
    }

    /// PROPERTY: Scrubbed progress is monotonic in scroll.
    #[test]
    fn property_about_progress_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut page = page();
        let max = page.max_scroll();

        page.scroll_to(lo * max);
        page.settle();
        let p_lo = page.about().progress();

        page.scroll_to(hi * max);
        page.settle();
        let p_hi = page.about().progress();

        prop_assert!(p_lo <= p_hi);
        prop_assert!((0.0..=1.0).contains(&p_lo) && (0.0..=1.0).contains(&p_hi));
    }
}
