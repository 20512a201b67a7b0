use super::*;
use crate::render::partition::{Partition, PartitionGrid};

fn canvas() -> Canvas {
    Canvas::new(4, 2).unwrap()
}

fn tile(x0: u32, x1: u32, y0: u32, y1: u32, fill: u8) -> Tile {
    let partition = Partition { x0, x1, y0, y1 };
    Tile {
        partition,
        indices: vec![fill; partition.area()],
    }
}

#[test]
fn tiles_are_stitched_in_place() {
    let tiles = PartitionGrid::for_count(4)
        .unwrap()
        .partitions(canvas())
        .into_iter()
        .enumerate()
        .map(|(i, p)| Tile {
            partition: p,
            indices: vec![i as u8; p.area()],
        })
        .collect();
    let frame = Frame::from_tiles(canvas(), tiles).unwrap();
    assert_eq!(frame.indices(), &[0, 0, 1, 1, 2, 2, 3, 3]);
    assert_eq!(frame.index_at(3, 1), Some(3));
    assert_eq!(frame.index_at(4, 0), None);
}

#[test]
fn tile_order_does_not_matter() {
    let a = Frame::from_tiles(canvas(), vec![tile(0, 2, 0, 2, 1), tile(2, 4, 0, 2, 2)]).unwrap();
    let b = Frame::from_tiles(canvas(), vec![tile(2, 4, 0, 2, 2), tile(0, 2, 0, 2, 1)]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn incomplete_or_overlapping_tiles_are_rejected() {
    assert!(Frame::from_tiles(canvas(), vec![tile(0, 2, 0, 2, 1)]).is_err());
    assert!(
        Frame::from_tiles(
            canvas(),
            vec![tile(0, 3, 0, 2, 1), tile(2, 4, 0, 2, 2)]
        )
        .is_err()
    );
    assert!(Frame::from_tiles(canvas(), vec![tile(0, 5, 0, 2, 1)]).is_err());

    let mut short = tile(0, 4, 0, 2, 1);
    short.indices.pop();
    assert!(Frame::from_tiles(canvas(), vec![short]).is_err());
}

#[test]
fn rgba_expansion_uses_palette() {
    let palette = Palette::grayscale();
    let frame = Frame::from_tiles(canvas(), vec![tile(0, 4, 0, 2, 9)]).unwrap();
    let rgba = frame.to_rgba8(&palette).unwrap();
    assert_eq!(rgba.len(), 4 * 2 * 4);
    assert_eq!(&rgba[..4], &[9, 9, 9, 255]);
    assert_eq!(frame.color_at(1, 1, &palette), Some([9, 9, 9]));
}

#[test]
fn fingerprint_tracks_content() {
    let a = Frame::from_tiles(canvas(), vec![tile(0, 4, 0, 2, 1)]).unwrap();
    let b = Frame::from_tiles(canvas(), vec![tile(0, 4, 0, 2, 2)]).unwrap();
    assert_ne!(a.fingerprint(), b.fingerprint());
}
