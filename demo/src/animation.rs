//! The animation state machine.
//!
//! [`Animation`] owns the current graph, the path found on it and the index
//! of the path node shown this frame. It knows nothing about windows: a
//! backend feeds it [`Msg::Tick`] once per frame and asks it to draw.

use gridpath_core::{Canvas, Effect, Key, Model, Msg, Point};
use gridpath_paths::{Graph, chebyshev, find_path, generate_graph};
use rand::Rng;

use crate::render;

/// Generate a graph and search it from [`Graph::start`] to [`Graph::goal`].
///
/// The path is empty when the goal is unreachable.
pub fn plan_round<R: Rng + ?Sized>(width: i32, rng: &mut R) -> (Graph, Vec<Point>) {
    let graph = generate_graph(width, rng);
    let path = match (graph.start(), graph.goal()) {
        (Some(start), Some(goal)) => find_path(&graph, start, goal, &chebyshev),
        _ => None,
    };

    match &path {
        Some(p) => log::info!(
            "new round: {} nodes, {} edges, path of {} nodes costing {}",
            graph.len(),
            graph.edges().len(),
            p.len(),
            graph.path_cost(p).unwrap_or_default()
        ),
        None => log::warn!("new round: goal unreachable, regenerating on next frame"),
    }

    (graph, path.unwrap_or_default())
}

/// One path node per frame, forever: generate, animate, regenerate.
pub struct Animation<R> {
    width: i32,
    cell_size: i32,
    rng: R,
    graph: Graph,
    path: Vec<Point>,
    step: usize,
    regenerations: u64,
}

impl<R: Rng> Animation<R> {
    /// Start the first round on a grid of side `width`.
    pub fn new(width: i32, cell_size: i32, mut rng: R) -> Self {
        let (graph, path) = plan_round(width, &mut rng);
        Self {
            width,
            cell_size,
            rng,
            graph,
            path,
            step: 0,
            regenerations: 0,
        }
    }

    /// Move to the next path node. Past the last node, or immediately when
    /// the path is empty, a new round replaces the graph and path.
    pub fn advance(&mut self) {
        self.step += 1;
        if self.step >= self.path.len() {
            self.regenerate();
        }
    }

    /// Replace the graph and path with a fresh round.
    pub fn regenerate(&mut self) {
        let (graph, path) = plan_round(self.width, &mut self.rng);
        self.graph = graph;
        self.path = path;
        self.step = 0;
        self.regenerations += 1;
        log::debug!("regeneration #{}", self.regenerations);
    }

    /// The path node highlighted this frame, `None` for an empty path.
    pub fn current(&self) -> Option<Point> {
        self.path.get(self.step).copied()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of rounds started after the first one.
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }
}

impl<R: Rng> Model for Animation<R> {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Tick => self.advance(),
            Msg::KeyDown(Key::Escape | Key::Char('q')) => return Some(Effect::End),
            Msg::KeyDown(Key::Space | Key::Char('r')) => self.regenerate(),
            Msg::Quit => log::info!("quit after {} regenerations", self.regenerations),
            Msg::Init | Msg::KeyDown(_) => {}
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        render::draw_round(canvas, &self.graph, self.current(), self.cell_size);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn animation(width: i32, seed: u64) -> Animation<StdRng> {
        Animation::new(width, 4, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn first_round_runs_corner_to_corner() {
        let a = animation(10, 1);
        assert_eq!(a.step(), 0);
        assert_eq!(a.regenerations(), 0);
        assert_eq!(a.path().first(), Some(&Point::new(0, 0)));
        assert_eq!(a.path().last(), Some(&Point::new(9, 9)));
        assert_eq!(a.current(), Some(Point::new(0, 0)));
        assert_eq!(a.graph().len(), 100);
    }

    #[test]
    fn stepping_through_the_path_regenerates_once() {
        let mut a = animation(8, 2);
        let len = a.path().len();
        assert!(len >= 15);

        for i in 1..len {
            a.advance();
            assert_eq!(a.step(), i);
            assert_eq!(a.current(), Some(a.path()[i]));
            assert_eq!(a.regenerations(), 0);
        }
        a.advance();
        assert_eq!(a.step(), 0);
        assert_eq!(a.regenerations(), 1);
        assert_eq!(a.current(), a.path().first().copied());
    }

    #[test]
    fn ticks_advance_and_keys_control() {
        let mut a = animation(5, 3);
        assert_eq!(a.update(Msg::Init), None);
        assert_eq!(a.update(Msg::Tick), None);
        assert_eq!(a.step(), 1);

        assert_eq!(a.update(Msg::KeyDown(Key::Char('r'))), None);
        assert_eq!(a.step(), 0);
        assert_eq!(a.regenerations(), 1);

        assert_eq!(a.update(Msg::KeyDown(Key::Enter)), None);
        assert_eq!(a.update(Msg::Quit), None);
        assert_eq!(a.update(Msg::KeyDown(Key::Escape)), Some(Effect::End));
        assert_eq!(a.update(Msg::KeyDown(Key::Char('q'))), Some(Effect::End));
    }

    #[test]
    fn empty_path_regenerates_on_next_frame() {
        let mut a = animation(6, 4);
        a.path.clear();
        assert_eq!(a.current(), None);

        let mut canvas = Canvas::new(24, 24);
        a.draw(&mut canvas);
        assert!(!canvas.pixels().contains(&render::HIGHLIGHT.to_pixel()));

        a.advance();
        assert_eq!(a.regenerations(), 1);
        assert_eq!(a.step(), 0);
        assert!(!a.path().is_empty());
    }

    #[test]
    fn single_cell_grid_cycles_every_frame() {
        let mut a = animation(1, 5);
        assert_eq!(a.path(), &[Point::ZERO]);
        for n in 1..=3 {
            a.advance();
            assert_eq!(a.regenerations(), n);
            assert_eq!(a.current(), Some(Point::ZERO));
        }
    }

    #[test]
    fn first_frame_highlights_start() {
        let mut a = animation(4, 9);
        assert_eq!(a.update(Msg::Init), None);
        let mut canvas = Canvas::new(16, 16);
        a.draw(&mut canvas);
        assert_eq!(canvas.at(0, 0), Some(render::HIGHLIGHT));
        assert_eq!(a.step(), 0);
    }

    #[test]
    fn draw_highlights_current_node() {
        let mut a = animation(4, 6);
        a.advance();
        let p = a.current().unwrap();
        let mut canvas = Canvas::new(16, 16);
        a.draw(&mut canvas);
        assert_eq!(canvas.at(p.x * 4, p.y * 4), Some(render::HIGHLIGHT));
    }

    #[test]
    fn same_seed_same_rounds() {
        let mut a = animation(7, 8);
        let mut b = animation(7, 8);
        for _ in 0..50 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.path(), b.path());
        assert_eq!(a.graph().edges(), b.graph().edges());
    }
}
