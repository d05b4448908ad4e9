pub mod error;
pub mod font;
pub mod generator;
pub mod renderer;
pub mod zone;

use derive_more::{Deref, DerefMut, From};
use glam::UVec2;

pub trait Area {
    type Output;
    fn area(&self) -> Self::Output;
}

impl Area for Grid {
    type Output = u32;

    fn area(&self) -> Self::Output {
        return self.x * self.y;
    }
}

/// The zone grid, x = columns, y = rows.
#[derive(Deref, DerefMut, From, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid(pub UVec2);

impl Grid {
    pub fn new(cols: u32, rows: u32) -> Self {
        return Grid(UVec2 { x: cols, y: rows });
    }

    /// Cell locations in row major order, loc.x = column, loc.y = row.
    pub fn iter_locs(&self) -> GridIter {
        return GridIter {
            cur: UVec2::ZERO,
            end: self.0,
        };
    }
}

#[derive(Clone, Debug)]
pub struct GridIter {
    cur: UVec2,
    end: UVec2,
}

impl Iterator for GridIter {
    type Item = UVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.y >= self.end.y || self.end.x == 0 {
            return None;
        }
        let ret = self.cur;
        self.cur.x += 1;
        if self.cur.x == self.end.x {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        return Some(ret);
    }
}
