// Host-side tests for carousel navigation and device strategy selection.

use portrait_core::carousel::{zone_for, Carousel, NavZone};
use portrait_core::{DeviceStrategy, PortraitConfig, PortraitVariant, Variant};

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const DESKTOP_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

#[test]
fn zones_split_the_view_in_half() {
    assert_eq!(zone_for(10.0, 300.0), NavZone::Left);
    assert_eq!(zone_for(149.9, 300.0), NavZone::Left);
    assert_eq!(zone_for(150.0, 300.0), NavZone::Right);
    assert_eq!(zone_for(299.0, 300.0), NavZone::Right);
}

#[test]
fn carousel_wraps_both_ways() {
    let mut c = Carousel::new(3);
    assert_eq!(c.index(), 0);
    assert_eq!(c.prev(), 2);
    assert_eq!(c.next(), 0);
    assert_eq!(c.next(), 1);
    assert_eq!(c.next(), 2);
    assert_eq!(c.next(), 0);
}

#[test]
fn carousel_navigates_by_zone() {
    let mut c = Carousel::new(4);
    assert_eq!(c.navigate(NavZone::Right), 1);
    assert_eq!(c.navigate(NavZone::Left), 0);
    assert_eq!(c.navigate(NavZone::Left), 3);
}

#[test]
fn carousel_select_ignores_out_of_range() {
    let mut c = Carousel::new(3);
    assert_eq!(c.select(2), 2);
    assert_eq!(c.select(7), 2);
}

#[test]
fn empty_carousel_never_moves() {
    let mut c = Carousel::new(0);
    assert!(c.is_empty());
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
    assert_eq!(c.select(0), 0);
}

#[test]
fn mobile_user_agents_select_mobile() {
    assert_eq!(DeviceStrategy::classify(IPHONE_UA, 1024.0), DeviceStrategy::Mobile);
    assert_eq!(
        DeviceStrategy::classify("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)", 1280.0),
        DeviceStrategy::Mobile
    );
}

#[test]
fn narrow_viewports_select_mobile() {
    assert_eq!(DeviceStrategy::classify(DESKTOP_UA, 768.0), DeviceStrategy::Mobile);
    assert_eq!(DeviceStrategy::classify(DESKTOP_UA, 769.0), DeviceStrategy::Desktop);
}

#[test]
fn strategy_resolves_tile_variants() {
    let standard = PortraitConfig::new("a", "a.jpg");
    let rainbow = PortraitConfig::new("b", "b.jpg").variant(PortraitVariant::Rainbow);

    assert_eq!(DeviceStrategy::Desktop.variant_for(&standard), Variant::Desktop);
    assert_eq!(DeviceStrategy::Desktop.variant_for(&rainbow), Variant::Rainbow);
    assert_eq!(DeviceStrategy::Mobile.variant_for(&standard), Variant::Mobile);
    assert_eq!(DeviceStrategy::Mobile.variant_for(&rainbow), Variant::Mobile);
}
