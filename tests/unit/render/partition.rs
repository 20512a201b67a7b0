use super::*;

fn coverage(canvas: Canvas, grid: PartitionGrid) -> Vec<u32> {
    let mut hits = vec![0u32; canvas.pixel_count()];
    for p in grid.partitions(canvas) {
        for y in p.y0..p.y1 {
            for x in p.x0..p.x1 {
                hits[(y * canvas.width + x) as usize] += 1;
            }
        }
    }
    hits
}

#[test]
fn for_count_prefers_square_grids() {
    let shape = |n| {
        let g = PartitionGrid::for_count(n).unwrap();
        (g.cols(), g.rows())
    };
    assert_eq!(shape(1), (1, 1));
    assert_eq!(shape(2), (2, 1));
    assert_eq!(shape(4), (2, 2));
    assert_eq!(shape(8), (4, 2));
    assert_eq!(shape(9), (3, 3));
    assert_eq!(shape(7), (7, 1));
    assert!(PartitionGrid::for_count(0).is_err());
    assert!(PartitionGrid::new(0, 2).is_err());
}

#[test]
fn for_count_handles_largest_counts() {
    let g = PartitionGrid::for_count(u32::MAX).unwrap();
    assert_eq!((g.cols(), g.rows()), (65537, 65535));
    let g = PartitionGrid::for_count(u32::MAX - 1).unwrap();
    assert_eq!(g.count(), (u32::MAX - 1) as usize);
    assert!(g.rows() <= g.cols());
}

#[test]
fn quadrants_split_at_half() {
    let canvas = Canvas::new(200, 100).unwrap();
    let parts = PartitionGrid::for_count(4).unwrap().partitions(canvas);
    assert_eq!(
        parts[0],
        Partition {
            x0: 0,
            x1: 100,
            y0: 0,
            y1: 50
        }
    );
    assert_eq!(
        parts[3],
        Partition {
            x0: 100,
            x1: 200,
            y0: 50,
            y1: 100
        }
    );
}

#[test]
fn partitions_tile_every_pixel_once() {
    for (w, h) in [(1, 1), (3, 2), (7, 5), (64, 64), (33, 17)] {
        let canvas = Canvas::new(w, h).unwrap();
        for n in [1, 2, 3, 4, 8, 16] {
            let grid = PartitionGrid::for_count(n).unwrap();
            assert_eq!(grid.partitions(canvas).len(), grid.count());
            assert!(
                coverage(canvas, grid).iter().all(|&c| c == 1),
                "{w}x{h} with {n} partitions"
            );
        }
    }
}

#[test]
fn partition_geometry_helpers() {
    let p = Partition {
        x0: 2,
        x1: 5,
        y0: 1,
        y1: 3,
    };
    assert_eq!((p.width(), p.height(), p.area()), (3, 2, 6));
    assert!(p.contains(2, 1));
    assert!(!p.contains(5, 1));
    assert!(!p.contains(2, 3));
}
