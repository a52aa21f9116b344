use crate::*;

use pagelist::{Indicator, ListOptions, LoadStatus, Mode, PageRequest, PageStatus};

fn render_number(row: &mut MemoryRow, item: &u32, _i: usize, _page: &[u32]) {
    row.content = item.to_string();
}

fn fixed_windowed(page_size: usize) -> ListOptions<u32, MemoryRow> {
    ListOptions::new(render_number)
        .with_mode(Mode::Windowed)
        .with_item_height(Some(50.0))
        .with_page_size(page_size)
}

#[test]
fn windowed_feed_loads_until_exhausted() {
    let mut c = Controller::new(MemoryHost::new(400.0, 50.0), fixed_windowed(20)).unwrap();
    let mut source = VecSource::new((0..40).collect());

    c.start();
    assert_eq!(c.serve(&mut source), 1);
    assert_eq!(c.list().len(), 20);
    assert_eq!(c.list().page(), 1);
    assert_eq!(c.list().status(), LoadStatus::Idle);

    let top = c.scroll_to_bottom(0);
    assert_eq!(top, 650.0);
    assert_eq!(c.serve(&mut source), 1);
    assert_eq!(c.list().len(), 40);
    assert_eq!(c.list().status(), LoadStatus::Exhausted);

    let w = c.list().window().unwrap();
    assert_eq!((w.start, w.end), (13, 33));
    assert_eq!(c.host().translate(), 650.0);
    assert_eq!(c.host().rows()[0].content, "13");

    c.scroll_to_bottom(200);
    c.frame(300);
    assert_eq!(c.next_request(), None);
    assert_eq!(c.host().indicator(), Some(Indicator::End));
    assert_eq!(source.served(), 2);
}

#[test]
fn failed_page_is_retried_manually() {
    let mut c = Controller::new(MemoryHost::new(400.0, 50.0), fixed_windowed(20)).unwrap();
    let mut source = VecSource::new((0..100).collect());
    source.fail_next(1);

    c.start();
    c.serve(&mut source);
    assert_eq!(c.list().status(), LoadStatus::Error);
    assert_eq!(c.host().indicator(), Some(Indicator::Failed));
    assert!(c.list().is_empty());

    // No automatic retry, whatever the scroll position.
    c.scroll_to_bottom(0);
    c.frame(500);
    assert_eq!(c.next_request(), None);

    assert!(c.retry());
    let request = c.next_request().unwrap();
    assert_eq!(request.page, 1);
    assert_eq!(request.page_size, 20);
    let (data, status) = source.fetch(request);
    assert!(c.deliver(request, data, status));
    assert_eq!(c.list().len(), 20);
    assert_eq!(c.list().status(), LoadStatus::Idle);
}

#[test]
fn measured_rows_feed_the_position_cache() {
    let host = MemoryHost::with_row_height(100.0, |i, _| if i % 2 == 0 { 20.0 } else { 40.0 });
    let options = ListOptions::new(render_number)
        .with_mode(Mode::Windowed)
        .with_page_size(5);
    let mut c = Controller::new(host, options).unwrap();
    let mut source = VecSource::new((0..30).collect());

    c.start();
    c.serve(&mut source);
    assert!(c.host().layout_requested());
    assert!(c.list().positions().is_empty());

    c.frame(0);
    let bottoms: Vec<f32> = c.list().positions().iter().map(|r| r.bottom).collect();
    assert_eq!(bottoms, vec![20.0, 60.0, 80.0, 120.0, 140.0]);
    assert_eq!(c.host().content_height(), Some(190.0));

    assert_eq!(c.scroll_to(100.0, 100), 90.0);
    assert_eq!(c.serve(&mut source), 1);
    let w = c.list().window().unwrap();
    assert_eq!((w.start, w.end, w.offset), (3, 8, 80.0));
    assert_eq!(c.host().translate(), 80.0);

    c.frame(200);
    assert_eq!(c.list().positions().len(), 8);
    assert_eq!(c.list().positions().get(7).unwrap().bottom, 240.0);
    assert_eq!(c.host().content_height(), Some(290.0));
}

#[test]
fn append_mode_mounts_every_page() {
    let options = ListOptions::new(render_number).with_page_size(4);
    let mut c = Controller::new(MemoryHost::new(200.0, 50.0), options).unwrap();
    let mut source = VecSource::new((0..10).collect());

    c.start();
    c.serve(&mut source);
    assert_eq!(c.host().rows().len(), 4);

    assert_eq!(c.scroll_to_bottom(0), 40.0);
    c.serve(&mut source);
    let mounted: Vec<usize> = c.host().rows().iter().map(|r| r.index).collect();
    assert_eq!(mounted, (0..8).collect::<Vec<_>>());
    assert_eq!(c.host().translate(), 0.0);
    assert_eq!(c.list().window(), None);
}

#[test]
fn clearing_reset_restarts_from_page_one() {
    let mut c = Controller::new(MemoryHost::new(400.0, 50.0), fixed_windowed(20)).unwrap();
    let mut source = VecSource::new((0..100).collect());
    c.start();
    c.serve(&mut source);

    c.reset(true);
    assert!(c.list().is_empty());
    assert!(c.host().rows().is_empty());
    assert_eq!(c.list().page(), 0);

    c.scroll_to(0.0, 1_000);
    let request = c.next_request().unwrap();
    assert_eq!(request.page, 1);
    let (data, status) = source.fetch(request);
    c.deliver(request, data, status);
    assert_eq!(c.list().items().first(), Some(&0));
}

#[test]
fn responses_from_before_a_reset_are_dropped() {
    let mut c = Controller::new(MemoryHost::new(400.0, 50.0), fixed_windowed(20)).unwrap();
    c.start();
    let stale = c.next_request().unwrap();

    c.reset(false);
    assert!(!c.deliver(stale, (0..20).collect(), PageStatus::More));
    assert!(c.list().is_empty());
    assert_eq!(c.list().status(), LoadStatus::Idle);
}

#[test]
fn closures_are_page_sources() {
    let mut c = Controller::new(MemoryHost::new(400.0, 50.0), fixed_windowed(3)).unwrap();
    let mut source =
        |req: PageRequest| (vec![req.page as u32; req.page_size], PageStatus::Exhausted);
    c.start();
    assert_eq!(c.serve(&mut source), 1);
    assert_eq!(c.list().items(), &[1, 1, 1]);
    assert_eq!(c.list().status(), LoadStatus::Exhausted);
}

#[test]
fn fixed_height_is_applied_on_mount() {
    let options = fixed_windowed(0).with_height("300px".parse().unwrap());
    let c = Controller::new(MemoryHost::new(800.0, 50.0), options).unwrap();
    assert_eq!(c.host().viewport_height(), 300.0);
    assert_eq!(c.list().viewport_height(), 300.0);
    assert_eq!(c.list().page_size(), 7);
}
