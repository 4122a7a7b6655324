//! Unit tests for tr-search.

#[cfg(test)]
mod helpers {
    use tr_core::{Cell, Direction, TrackOrientation};
    use tr_world::{GridWorld, GridWorldBuilder};

    use crate::{RailSearch, SearchStatus, Slice};

    /// A 5×5 closed loop on the ground with corners at (0,0), (4,0), (4,4)
    /// and (0,4) in x/z.
    pub fn square_loop() -> GridWorld {
        let corner = |d| TrackOrientation::corner(d).unwrap();
        GridWorldBuilder::new()
            .ground(0)
            .rail(Cell::new(0, 0, 0), corner(Direction::NorthWest))
            .rail(Cell::new(4, 0, 0), corner(Direction::NorthEast))
            .rail(Cell::new(4, 0, 4), corner(Direction::SouthEast))
            .rail(Cell::new(0, 0, 4), corner(Direction::SouthWest))
            .rail_line(Cell::new(1, 0, 0), Direction::East, 3)
            .rail_line(Cell::new(1, 0, 4), Direction::East, 3)
            .rail_line(Cell::new(0, 0, 1), Direction::South, 3)
            .rail_line(Cell::new(4, 0, 1), Direction::South, 3)
            .build()
    }

    /// A northbound main line from the origin with a junction at
    /// (0, 0, -4).  Its sign on the west side sends `treasure` east onto a
    /// three-cell branch.
    pub fn treasure_line() -> GridWorld {
        GridWorldBuilder::new()
            .ground(0)
            .rail_line(Cell::new(0, 0, -1), Direction::North, 8)
            .rail_line(Cell::new(1, 0, -4), Direction::East, 3)
            .sign(Cell::new(-1, 0, -4), &["[junction]", "treasure:3"])
            .build()
    }

    /// A straight northbound line of `len` rails starting next to the origin.
    pub fn line(len: i32) -> GridWorld {
        GridWorldBuilder::new()
            .ground(0)
            .rail_line(Cell::new(0, 0, -1), Direction::North, len)
            .build()
    }

    /// Step until done, returning every slice.
    pub fn drain(search: &mut RailSearch, world: &GridWorld) -> Vec<Slice> {
        let mut slices = Vec::new();
        loop {
            let slice = search.step(world);
            let done = slice.status == SearchStatus::Done;
            slices.push(slice);
            if done {
                return slices;
            }
            assert!(slices.len() < 1000, "search did not terminate");
        }
    }
}

// ── WakeQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wake_queue {
    use tr_core::{SearchId, Tick};

    use crate::WakeQueue;

    #[test]
    fn drains_exact_tick_in_push_order() {
        let mut q = WakeQueue::new();
        q.push(Tick(10), SearchId(2));
        q.push(Tick(5), SearchId(1));
        q.push(Tick(10), SearchId(0));
        assert_eq!(q.len(), 3);
        assert_eq!(q.tick_count(), 2);
        assert_eq!(q.next_tick(), Some(Tick(5)));

        assert_eq!(q.drain_tick(Tick(7)), None);
        assert_eq!(q.drain_tick(Tick(10)), Some(vec![SearchId(2), SearchId(0)]));
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain_tick(Tick(5)), Some(vec![SearchId(1)]));
        assert!(q.is_empty());
        assert_eq!(q.next_tick(), None);
    }

    #[test]
    fn push_moves_an_already_queued_search() {
        let mut q = WakeQueue::new();
        q.push(Tick(10), SearchId(1));
        q.push(Tick(20), SearchId(1));
        assert_eq!(q.len(), 1);
        assert_eq!(q.tick_count(), 1);
        assert_eq!(q.scheduled(SearchId(1)), Some(Tick(20)));
        assert_eq!(q.drain_tick(Tick(10)), None);
    }

    #[test]
    fn removed_search_frees_its_tick() {
        let mut q = WakeQueue::new();
        q.push(Tick(10), SearchId(1));
        q.push(Tick(10), SearchId(2));
        q.push(Tick(30), SearchId(3));

        assert_eq!(q.remove(SearchId(3)), Some(Tick(30)));
        assert_eq!(q.remove(SearchId(3)), None);
        assert_eq!(q.tick_count(), 1);
        assert_eq!(q.next_tick(), Some(Tick(10)));

        assert_eq!(q.remove(SearchId(1)), Some(Tick(10)));
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain_tick(Tick(10)), Some(vec![SearchId(2)]));
        assert_eq!(q.scheduled(SearchId(2)), None);
        assert!(q.is_empty());
    }
}

// ── RailSearch ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use proptest::prelude::*;
    use tr_core::{Cell, Direction, RouterConfig, TrackOrientation};
    use tr_world::GridWorldBuilder;

    use super::helpers::*;
    use crate::{DirectionReport, RailSearch, SearchStatus};

    fn config(cells_per_slice: usize) -> RouterConfig {
        RouterConfig { cells_per_slice, ..RouterConfig::default() }
    }

    #[test]
    fn closed_loop_terminates() {
        let world = square_loop();
        let mut search = RailSearch::new(Cell::new(2, 0, 0), &RouterConfig::default());
        let slices = drain(&mut search, &world);

        // North, East, West, South: one slice each.
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].cells, 0);
        assert_eq!(slices[1].cells, 16);
        assert_eq!(slices[2].cells, 16);
        assert!(slices.iter().all(|s| s.report.is_none()));
        assert!(search.is_done());
    }

    #[test]
    fn budget_suspends_and_resumes() {
        let world = line(250);
        let mut search = RailSearch::new(Cell::new(0, 0, 0), &config(100));

        let first = search.step(&world);
        assert_eq!(first.cells, 100);
        assert_eq!(first.status, SearchStatus::Suspended);
        assert_eq!(search.current_direction(), Some(Direction::North));

        let second = search.step(&world);
        assert_eq!(second.cells, 100);
        let third = search.step(&world);
        assert_eq!(third.cells, 50);
        assert_eq!(third.status, SearchStatus::Suspended);
        assert_eq!(search.current_direction(), None);

        let rest = drain(&mut search, &world);
        assert_eq!(rest.len(), 3);
        assert!(rest.iter().all(|s| s.cells == 0));
    }

    #[test]
    fn junction_label_reported_once() {
        let world = treasure_line();
        let mut search = RailSearch::new(Cell::new(0, 0, 0), &RouterConfig::default());
        let reports: Vec<_> = drain(&mut search, &world)
            .into_iter()
            .filter_map(|s| s.report)
            .collect();
        assert_eq!(
            reports,
            [DirectionReport { direction: Direction::North, labels: vec!["treasure".into()] }]
        );
    }

    #[test]
    fn label_needing_reversal_is_not_reported() {
        let world = treasure_line();
        let mut search = RailSearch::new(Cell::new(4, 0, -4), &RouterConfig::default());
        let slices = drain(&mut search, &world);
        assert!(slices.iter().all(|s| s.report.is_none()));
        // The westbound walk crossed the branch and the junction.
        assert_eq!(slices[2].cells, 4);
    }

    #[test]
    fn default_rules_are_followed_but_not_reported() {
        let world = GridWorldBuilder::new()
            .ground(0)
            .rail_line(Cell::new(0, 0, -1), Direction::North, 4)
            .rail_line(Cell::new(1, 0, -4), Direction::East, 3)
            .rail(Cell::new(0, 0, -5), TrackOrientation::NORTH_SOUTH)
            .sign(Cell::new(-1, 0, -4), &["[junction]", "default:3", "mine:2"])
            .build();
        let mut search = RailSearch::new(Cell::new(0, 0, 0), &RouterConfig::default());
        let first = search.step(&world);
        // Three rails, the junction, then the three-cell branch.
        assert_eq!(first.cells, 7);
        assert_eq!(
            first.report,
            Some(DirectionReport { direction: Direction::North, labels: vec!["mine".into()] })
        );
    }

    #[test]
    fn falls_onto_lower_rail_and_climbs_slopes() {
        let world = GridWorldBuilder::new()
            .ground(0)
            .rail(Cell::new(0, 0, -1), TrackOrientation::NORTH_SOUTH)
            .rail(Cell::new(0, -1, -2), TrackOrientation::slope(Direction::North).unwrap())
            .rail(Cell::new(0, 0, -3), TrackOrientation::NORTH_SOUTH)
            .rail(Cell::new(0, 0, -4), TrackOrientation::NORTH_SOUTH)
            .build();
        let mut search = RailSearch::new(Cell::new(0, 0, 0), &RouterConfig::default());
        assert_eq!(search.step(&world).cells, 4);
    }

    #[test]
    fn falling_off_the_world_ends_the_walk() {
        let world = GridWorldBuilder::new()
            .min_y(-3)
            .rail(Cell::new(0, 0, -1), TrackOrientation::NORTH_SOUTH)
            .build();
        let mut search = RailSearch::new(Cell::new(0, 0, 0), &RouterConfig::default());
        assert_eq!(search.step(&world).cells, 1);
    }

    #[test]
    fn report_text_uses_compass_names() {
        let report = DirectionReport {
            direction: Direction::East,
            labels:    vec!["a".into(), "b".into()],
        };
        assert_eq!(report.to_string(), "North: a; b; ");
    }

    proptest! {
        #[test]
        fn line_is_walked_in_budgeted_slices(len in 1i32..400, budget in 1usize..150) {
            let world = line(len);
            let mut search = RailSearch::new(Cell::new(0, 0, 0), &config(budget));
            let slices = drain(&mut search, &world);
            let total: usize = slices.iter().map(|s| s.cells).sum();
            prop_assert_eq!(total, len as usize);
            prop_assert!(slices.iter().all(|s| s.cells <= budget));
        }
    }
}

// ── SearchRunner ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner {
    use tr_core::{Cell, RouterConfig, SearchId, Tick};

    use super::helpers::*;
    use crate::{DirectionReport, MessageLog, NoopObserver, SearchObserver, SearchRunner};

    /// Records when each callback fired.
    #[derive(Default)]
    struct Recorder {
        slices:    Vec<(SearchId, Tick, usize)>,
        reports:   Vec<(SearchId, DirectionReport)>,
        completed: Vec<(SearchId, Tick)>,
    }

    impl SearchObserver for Recorder {
        fn on_slice(&mut self, id: SearchId, tick: Tick, cells: usize) {
            self.slices.push((id, tick, cells));
        }

        fn on_report(&mut self, id: SearchId, report: &DirectionReport) {
            self.reports.push((id, report.clone()));
        }

        fn on_search_complete(&mut self, id: SearchId, tick: Tick) {
            self.completed.push((id, tick));
        }
    }

    #[test]
    fn first_slice_runs_immediately_then_after_delay() {
        let world = line(250);
        let mut runner = SearchRunner::new(RouterConfig::default());
        let mut rec = Recorder::default();

        let id = runner.start(&world, Cell::new(0, 0, 0), &mut rec);
        assert_eq!(rec.slices, [(id, Tick(0), 100)]);
        assert_eq!(runner.active(), 1);

        for _ in 0..10 {
            assert_eq!(runner.run_tick(&world, &mut rec), 0);
        }
        assert_eq!(runner.run_tick(&world, &mut rec), 1);
        assert_eq!(rec.slices[1], (id, Tick(10), 100));

        let end = runner.run_until_idle(&world, &mut rec);
        let ticks: Vec<_> = rec.slices.iter().map(|&(_, t, _)| t.0).collect();
        assert_eq!(ticks, [0, 10, 20, 30, 40, 50]);
        assert_eq!(rec.completed, [(id, Tick(50))]);
        assert_eq!(end, Tick(51));
        assert!(runner.is_idle());
    }

    #[test]
    fn abandoned_search_is_not_resumed() {
        let world = line(250);
        let mut runner = SearchRunner::new(RouterConfig::default());
        let mut rec = Recorder::default();

        let id = runner.start(&world, Cell::new(0, 0, 0), &mut rec);
        assert_eq!(runner.queued(), 1);
        assert!(runner.abandon(id));
        assert!(!runner.abandon(id));
        assert_eq!(runner.queued(), 0);
        assert!(runner.is_idle());

        // Nothing is left to run, so the clock stays put.
        assert_eq!(runner.run_until_idle(&world, &mut rec), Tick(0));
        assert_eq!(runner.now(), Tick(0));
        assert_eq!(rec.slices.len(), 1);
        assert!(rec.completed.is_empty());
    }

    #[test]
    fn ids_wrap_past_the_sentinel() {
        let world = line(250);
        let mut runner =
            SearchRunner::new(RouterConfig::default()).with_next_id(SearchId::INVALID.0 - 1);
        let mut rec = Recorder::default();

        let last = runner.start(&world, Cell::new(0, 0, 0), &mut rec);
        assert_eq!(last, SearchId(u32::MAX - 1));
        let wrapped = runner.start(&world, Cell::new(0, 0, 0), &mut rec);
        assert_eq!(wrapped, SearchId(0));
        assert!(wrapped.is_valid());
        assert_eq!(runner.active(), 2);
    }

    #[test]
    fn searches_progress_independently() {
        let world = treasure_line();
        let mut runner = SearchRunner::new(RouterConfig::default());
        let mut rec = Recorder::default();

        let a = runner.start(&world, Cell::new(0, 0, 0), &mut rec);
        let b = runner.start(&world, Cell::new(4, 0, -4), &mut rec);
        assert_ne!(a, b);
        assert_eq!(runner.active(), 2);

        runner.run_until_idle(&world, &mut rec);
        assert_eq!(rec.reports.len(), 1);
        assert_eq!(rec.reports[0].0, a);
        assert_eq!(rec.completed.len(), 2);
    }

    #[test]
    fn message_log_transcript() {
        let world = treasure_line();
        let mut runner = SearchRunner::new(RouterConfig::default());
        let mut log = MessageLog::new();

        let id = runner.start(&world, Cell::new(0, 0, 0), &mut log);
        runner.run_until_idle(&world, &mut log);
        let messages: Vec<_> = log.for_search(id).collect();
        assert_eq!(messages, ["Junction search started", "West: treasure; ", "Search complete"]);
    }

    #[test]
    fn zero_delay_still_advances() {
        let world = line(30);
        let config = RouterConfig { cells_per_slice: 10, slice_delay_ticks: 0, ..RouterConfig::default() };
        let mut runner = SearchRunner::new(config);
        let mut obs = NoopObserver;

        runner.start(&world, Cell::new(0, 0, 0), &mut obs);
        let end = runner.run_until_idle(&world, &mut obs);
        assert!(runner.is_idle());
        assert!(end > Tick(0));
    }
}
