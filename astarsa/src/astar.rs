use crate::{
    alignment_graph::*,
    bucket_queue::{BucketQueue, QueueElement},
    prelude::*,
    stats::AstarStats,
    traceback::traceback,
};
use log::{debug, trace};
use sa_heuristic::*;

/// Find a minimum cost alignment of the sentences of `a` and `b`.
///
/// Returns the distance, the path of operations from `(0, 0)` to `(m, n)`,
/// and statistics of the run. With a heuristic that is not admissible the
/// path is still valid, but may not be optimal.
pub fn astar<H: Heuristic>(
    a: &Document,
    b: &Document,
    mode: UnitMode,
    h: &H,
) -> Result<((Cost, Vec<AlignmentStep>), AstarStats), AlignError> {
    a.validate(DocId::A)?;
    b.validate(DocId::B)?;

    let heuristic = *h;
    let start = instant::Instant::now();
    let ref graph = SentenceGraph::new(a, b, mode);
    let ref h = h.build(&graph.sizes_a, &graph.sizes_b);
    let precomp = start.elapsed().as_secs_f64();

    let mut stats = AstarStats::init(a, b);

    // f -> (pos, g)
    let mut queue = BucketQueue::<(Pos, Cost)>::default();
    let mut states = StateGrid::new(graph.target());

    // Initialization with the root state.
    {
        let start = graph.start();
        states[start].g = 0;
        queue.push(QueueElement {
            f: h.h(start),
            data: (start, 0),
        });
        stats.explored += 1;
    }

    let dist = loop {
        let Some(QueueElement {
            f: queue_f,
            data: (pos, queue_g),
        }) = queue.pop()
        else {
            return Err(AlignError::SearchExhausted {
                target: graph.target(),
            });
        };

        // Copy for local usage.
        let state = states[pos];

        // Skip outdated entries: the state was reached more cheaply after this push.
        if queue_g > state.g {
            stats.stale += 1;
            continue;
        }
        debug_assert_eq!(queue_g, state.g);

        stats.expanded += 1;
        trace!("Expand {pos} at g={queue_g} f={queue_f}");

        if pos == graph.target() {
            break state.g;
        }

        graph.iterate_outgoing_edges(pos, |next, op, cost| {
            let next_g = state.g + cost;
            let next_h = h.h(next);
            if CHECK_CONSISTENCY && H::IS_ADMISSIBLE {
                debug_assert!(
                    queue_f - queue_g <= cost + next_h,
                    "Heuristic is not consistent on {op} edge {pos} -> {next}: h={} > {cost} + {next_h}",
                    queue_f - queue_g
                );
            }

            let cur_next = &mut states[next];

            // If the next state was already reached with smaller or equal g, skip exploring again.
            if cur_next.g <= next_g {
                return;
            }
            if cur_next.is_reached() {
                stats.improved += 1;
            }

            cur_next.g = next_g;
            cur_next.provenance = Some(Provenance {
                parent: pos,
                op,
                cost,
            });

            let next_f = next_g + next_h;
            queue.push(QueueElement {
                f: next_f,
                data: (next, next_g),
            });
            stats.explored += 1;
            trace!("Open {next} from {pos} via {op} g={next_g} f={next_f}");
        });
    };
    let astar_done = start.elapsed().as_secs_f64();

    stats.max_queue = queue.max_size();
    stats.grid_capacity = states.capacity();

    let traceback_start = instant::Instant::now();
    let (d, path) = traceback(&states, graph.target())?;
    stats.timing.traceback = traceback_start.elapsed().as_secs_f64();

    // Only with an admissible heuristic is every state expanded with its final
    // g, so that the edge costs along the path sum exactly to the distance.
    // Otherwise, the traced path can be cheaper than the g of the target.
    if H::IS_ADMISSIBLE && VERIFY_TRACEBACK && d != dist {
        return Err(AlignError::TracebackCostMismatch {
            target: graph.target(),
            traced: d,
            distance: dist,
        });
    }

    stats.h = h.stats();
    if H::IS_ADMISSIBLE {
        debug_assert!(
            stats.h.h0 <= d,
            "Heuristic at start is {} but the distance is only {d}!",
            stats.h.h0
        );
    }

    stats.distance = d;
    stats.timing.precomp = precomp;
    stats.timing.astar = astar_done - precomp;
    stats.timing.total = start.elapsed().as_secs_f64();
    debug!(
        "Aligned {}x{} sentences with {}: distance {d}, expanded {}, explored {}, stale {}",
        stats.len_a,
        stats.len_b,
        heuristic.name(),
        stats.expanded,
        stats.explored,
        stats.stale
    );
    Ok(((d, path), stats))
}
