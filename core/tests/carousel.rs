mod support;

use proptest::prelude::*;
use support::{build_widget, images, FakeMedia};
use vetrom_gallery_core::{CarouselAction, Command, Effect, GalleryError, GalleryIndex};

fn carousel(gallery: usize, action: CarouselAction) -> Command {
    Command::Carousel {
        gallery: GalleryIndex(gallery),
        action,
    }
}

proptest! {
    #[test]
    fn next_k_times_is_identity(len in 1usize..12, start in 0usize..12) {
        let start = start % len;
        let (mut widget, _) = build_widget(&[images(len)]);
        widget.dispatch_collect(carousel(0, CarouselAction::GoTo(start))).unwrap();
        for _ in 0..len {
            widget.dispatch_collect(carousel(0, CarouselAction::Next)).unwrap();
        }
        prop_assert_eq!(widget.gallery(GalleryIndex(0)).unwrap().current_slide(), start);
    }

    #[test]
    fn prev_k_times_is_identity(len in 1usize..12, start in 0usize..12) {
        let start = start % len;
        let (mut widget, _) = build_widget(&[images(len)]);
        widget.dispatch_collect(carousel(0, CarouselAction::GoTo(start))).unwrap();
        for _ in 0..len {
            widget.dispatch_collect(carousel(0, CarouselAction::Prev)).unwrap();
        }
        prop_assert_eq!(widget.gallery(GalleryIndex(0)).unwrap().current_slide(), start);
    }

    #[test]
    fn at_most_one_video_left_unpaused(kinds in proptest::collection::vec(any::<bool>(), 1..10), steps in 0usize..20) {
        let media: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(i, is_video)| {
                if *is_video {
                    FakeMedia::video(&format!("v{i}.mp4"), None)
                } else {
                    FakeMedia::image(&format!("i{i}.jpg"))
                }
            })
            .collect();
        let video_count = kinds.iter().filter(|v| **v).count();
        let (mut widget, _) = build_widget(&[media]);
        for _ in 0..=steps {
            let effects = widget.dispatch_collect(carousel(0, CarouselAction::Next)).unwrap();
            let Some(Effect::SlideChanged { view, .. }) = effects.first() else {
                panic!("expected a slide change");
            };
            prop_assert!(!view.pause.contains(&view.active));
            prop_assert!(video_count - view.pause.len() <= 1);
        }
    }
}

#[test]
fn galleries_navigate_independently() {
    let (mut widget, _) = build_widget(&[images(3), images(4)]);
    widget.dispatch_collect(carousel(1, CarouselAction::Prev)).unwrap();
    widget.dispatch_collect(carousel(0, CarouselAction::Next)).unwrap();
    widget.dispatch_collect(carousel(0, CarouselAction::Next)).unwrap();

    assert_eq!(widget.gallery(GalleryIndex(0)).unwrap().current_slide(), 2);
    assert_eq!(widget.gallery(GalleryIndex(1)).unwrap().current_slide(), 3);
}

#[test]
fn slide_change_reports_transform() {
    let (mut widget, _) = build_widget(&[images(3)]);
    let effects = widget.dispatch_collect(carousel(0, CarouselAction::Prev)).unwrap();
    let [Effect::SlideChanged { gallery, view }] = effects.as_slice() else {
        panic!("unexpected effects {effects:?}");
    };
    assert_eq!(*gallery, GalleryIndex(0));
    assert_eq!(view.active, 2);
    assert_eq!(view.transform(), "translateX(-200%)");
}

#[test]
fn rejected_commands_change_nothing() {
    let (mut widget, _) = build_widget(&[images(2)]);
    widget.dispatch_collect(carousel(0, CarouselAction::Next)).unwrap();

    let mut effects = Vec::new();
    let err = widget
        .dispatch(carousel(0, CarouselAction::GoTo(9)), &mut effects)
        .expect_err("out of range");
    assert!(matches!(err, GalleryError::SlideOutOfRange { slide: 9, len: 2, .. }));
    assert!(effects.is_empty());
    assert_eq!(widget.gallery(GalleryIndex(0)).unwrap().current_slide(), 1);

    let err = widget
        .dispatch(carousel(3, CarouselAction::Next), &mut effects)
        .expect_err("unknown gallery");
    assert!(matches!(err, GalleryError::UnknownGallery { len: 1, .. }));
    assert!(effects.is_empty());
}
