use super::*;

const ICON: &str = "@";

fn plain() -> Painter {
    Painter::new(Markup::Plain)
}

fn dwm() -> Painter {
    Painter::new(Markup::Dwm)
}

/// the visible columns, ignoring markup and the icon.
fn columns(rendered: &str) -> usize {
    let visible = rendered
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>();
    visible
        .strip_suffix(ICON)
        .expect("segments end with their icon")
        .chars()
        .count()
}

mod rate_tests {
    use super::*;

    const RATES: &[i64] = &[
        0,
        1,
        9,
        10,
        99,
        100,
        999,
        1000,
        1023,
        1024,
        10 * KIB,
        100 * KIB,
        999 * KIB,
        1000 * KIB - 1,
        1000 * KIB,
        MIB,
        10 * MIB,
        999 * MIB,
        1000 * MIB - 1,
    ];

    #[test]
    fn width_is_constant() {
        for markup in [Markup::Plain, Markup::Dwm] {
            let painter = Painter::new(markup);
            for &rate in RATES {
                let rendered = painter.rate(ICON, rate);
                assert_eq!(columns(&rendered), 4, "{rate} rendered as {rendered:?}");
            }
        }
    }

    #[test]
    fn bytes() {
        assert_eq!(plain().rate(ICON, 0), "0.0B@");
        assert_eq!(plain().rate(ICON, 7), "7.0B@");
        assert_eq!(plain().rate(ICON, 42), " 42B@");
        assert_eq!(plain().rate(ICON, 512), "512B@");
    }

    #[test]
    fn kibibytes() {
        assert_eq!(plain().rate(ICON, 1000), "0.9K@");
        assert_eq!(plain().rate(ICON, 1536), "1.5K@");
        assert_eq!(plain().rate(ICON, 20 * KIB), " 20K@");
        assert_eq!(plain().rate(ICON, 640 * KIB), "640K@");
    }

    #[test]
    fn mebibytes() {
        assert_eq!(plain().rate(ICON, 2_500_000), "2.3M@");
        assert_eq!(plain().rate(ICON, 64 * MIB), " 64M@");
        assert_eq!(plain().rate(ICON, 999 * MIB), "999M@");
    }

    #[test]
    fn mebibytes_highlight_the_icon() {
        assert_eq!(dwm().rate(ICON, 5 * MIB), "\u{1}5.0M\u{2}@\u{1}");
        assert_eq!(dwm().rate(ICON, 5 * KIB), "\u{1}5.0K@");
    }

    #[test]
    fn negative_is_an_error() {
        for rate in [-1, -1024, i64::MIN] {
            assert_eq!(plain().rate(ICON, rate), " ERR@");
        }
        assert_eq!(dwm().rate(ICON, -1), " \u{6}ERR\u{1}@");
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(plain().rate(ICON, 1000 * MIB), " ERR@");
        assert_eq!(plain().rate(ICON, i64::MAX), " ERR@");
    }
}

mod percentage_tests {
    use super::*;

    #[test]
    fn in_range_is_never_an_error() {
        for p in 0..100 {
            let rendered = plain().percentage(ICON, p, false, false);
            assert!(!rendered.contains("HI"), "{rendered}");
            assert!(!rendered.contains("NEG"), "{rendered}");
            assert_eq!(columns(&rendered), 3);
        }
    }

    #[test]
    fn right_aligned() {
        assert_eq!(plain().percentage(ICON, 5, false, false), "  5@");
        assert_eq!(plain().percentage(ICON, 42, false, false), " 42@");
        assert_eq!(plain().percentage(ICON, 100, false, false), "100@");
        assert_eq!(plain().percentage(ICON, 999, false, false), "999@");
    }

    #[test]
    fn too_high() {
        assert_eq!(plain().percentage(ICON, 1000, false, false), " HI@");
        assert_eq!(dwm().percentage(ICON, 4000, false, false), " \u{6}HI\u{1}@");
    }

    #[test]
    fn negative() {
        assert_eq!(plain().percentage(ICON, -3, false, false), "NEG@");
        assert_eq!(dwm().percentage(ICON, -3, true, true), "\u{6}NEG\u{1}@");
    }

    #[test]
    fn urgent_wins_over_warning() {
        assert_eq!(dwm().percentage(ICON, 97, true, true), " 97\u{6}@");
        assert_eq!(dwm().percentage(ICON, 75, false, true), " 75\u{3}@");
        assert_eq!(dwm().percentage(ICON, 30, false, false), " 30@");
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn error_fills_a_percentage_column() {
        assert_eq!(plain().error(ICON), "ERR@");
        assert_eq!(columns(&dwm().error(ICON)), 3);
    }

    #[test]
    fn wide_error_fills_a_rate_column() {
        assert_eq!(plain().wide_error(ICON), " ERR@");
        assert_eq!(columns(&dwm().wide_error(ICON)), 4);
    }
}

mod markup_tests {
    use super::*;

    #[test]
    fn dwm_control_bytes() {
        assert_eq!(Markup::Dwm.escape(Emphasis::Reset), "\u{1}");
        assert_eq!(Markup::Dwm.escape(Emphasis::Good), "\u{2}");
        assert_eq!(Markup::Dwm.escape(Emphasis::Warning), "\u{3}");
        assert_eq!(Markup::Dwm.escape(Emphasis::Urgent), "\u{6}");
    }

    #[test]
    fn terminal_uses_ansi_escapes() {
        for emphasis in [
            Emphasis::Reset,
            Emphasis::Good,
            Emphasis::Warning,
            Emphasis::Urgent,
        ] {
            assert!(Markup::Terminal.escape(emphasis).starts_with("\u{1b}["));
        }
        assert_ne!(
            Markup::Terminal.escape(Emphasis::Urgent),
            Markup::Terminal.escape(Emphasis::Warning)
        );
    }

    #[test]
    fn plain_is_empty() {
        assert_eq!(Markup::Plain.escape(Emphasis::Urgent), "");
    }

    #[test]
    fn rendering_is_idempotent() {
        let painter = Painter::new(Markup::Terminal);
        assert_eq!(painter.rate(ICON, 123_456), painter.rate(ICON, 123_456));
        assert_eq!(
            painter.percentage(ICON, 88, false, true),
            painter.percentage(ICON, 88, false, true)
        );
    }
}
