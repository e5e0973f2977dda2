use eframe::egui::Pos2;

/// Everything drawn so far, as an append-only list of subpaths.
///
/// `move_to` opens a new subpath, `line_to` extends the current one. The
/// path only ever grows; it is cleared by restarting the process.
#[derive(Debug, Default)]
pub struct PlotPath {
    subpaths: Vec<Vec<Pos2>>,
}

impl PlotPath {
    /// Starts a new subpath at `point`.
    pub fn move_to(&mut self, point: Pos2) {
        self.subpaths.push(vec![point]);
    }

    /// Extends the current subpath with a straight segment to `point`.
    ///
    /// With no open subpath the segment starts at the origin, matching the
    /// painter-path convention of the toolkit.
    pub fn line_to(&mut self, point: Pos2) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            None => self.subpaths.push(vec![Pos2::ZERO, point]),
        }
    }

    /// The most recently appended point, if any.
    pub fn last_point(&self) -> Option<Pos2> {
        self.subpaths.last().and_then(|subpath| subpath.last()).copied()
    }

    /// Number of straight segments across all subpaths.
    pub fn segment_count(&self) -> usize {
        self.subpaths
            .iter()
            .map(|subpath| subpath.len().saturating_sub(1))
            .sum()
    }

    pub fn subpaths(&self) -> impl Iterator<Item = &[Pos2]> {
        self.subpaths.iter().map(Vec::as_slice)
    }
}
