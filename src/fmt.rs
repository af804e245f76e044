use std::fmt;

use crate::{BoardGraph, Square};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for BoardGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for number in 1..=self.board_size() {
            let square = Square(number);
            write!(f, "{square} =>")?;
            for (target, i) in self.neighbors(square).iter().zip(0..) {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{target}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
