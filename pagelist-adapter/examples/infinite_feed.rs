// Example: a windowed feed with fixed row heights, loaded page by page.
use pagelist::{ListOptions, Mode};
use pagelist_adapter::{Controller, MemoryHost, MemoryRow, VecSource};

fn main() {
    let options = ListOptions::new(|row: &mut MemoryRow, item: &String, i: usize, page: &[String]| {
        row.content = format!("{item} ({}/{})", i + 1, page.len());
    })
    .with_mode(Mode::Windowed)
    .with_item_height(Some(48.0));

    let mut feed = Controller::new(MemoryHost::new(480.0, 48.0), options).expect("valid options");
    let mut source = VecSource::new((0..95).map(|i| format!("post #{i}")).collect());

    feed.start();
    let mut now_ms = 0;
    while feed.serve(&mut source) > 0 {
        let list = feed.list();
        println!(
            "page={} len={} status={:?} window={:?}",
            list.page(),
            list.len(),
            list.status(),
            list.window()
        );
        // Each scroll lands in a new throttle window.
        now_ms += 150;
        feed.scroll_to_bottom(now_ms);
        feed.frame(now_ms);
    }

    println!("indicator={:?}", feed.host().indicator());
    println!("first mounted row: {:?}", feed.host().rows().first());
}
