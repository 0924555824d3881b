//! End-to-end recording pipeline: producer threads build and serialize their
//! own traces, a single aggregator moves the buffers into a batch. Mirrors
//! the intended deployment shape, where traces never cross threads until
//! after their terminal serialize call.

use std::thread;

use apm_agent_core::{clock, proto, Batch, Error, Hello, Trace};
use prost::Message;
use rstest::rstest;

#[test]
fn producers_serialize_independently_then_one_aggregator_batches() {
    let workers: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                let started = clock::high_res_time().expect("clock available");
                let mut trace = Trace::new(started, format!("uuid-{worker}")).unwrap();
                trace.set_name(format!("worker#{worker}")).unwrap();

                let span = trace.start_span(started, "db.query").unwrap();
                let stopped = clock::high_res_time().expect("clock available");
                trace.stop_span(span, stopped).unwrap();

                trace.serialize().unwrap()
            })
        })
        .collect();

    let mut batch = Batch::new(1700000000, Some("web-1".to_owned()));
    let mut moved = 0u64;
    for worker in workers {
        batch.move_in(worker.join().unwrap()).unwrap();
        moved += 1;
    }
    batch.set_endpoint_count("worker#all", moved).unwrap();

    let payload = batch.serialize().unwrap();
    let decoded = proto::Batch::decode(payload.as_slice()).unwrap();
    assert_eq!(decoded.traces.len(), 8);
    assert_eq!(decoded.endpoint_counts.get("worker#all"), Some(&8));

    // Aggregation-side grouping only needs the cheap name peek.
    let mut names: Vec<_> = decoded
        .traces
        .iter()
        .map(|buf| Trace::name_from_serialized(buf).unwrap().unwrap())
        .collect();
    names.sort();
    assert_eq!(names[0], "worker#0");
    assert_eq!(names.len(), 8);
}

#[test]
fn handshake_precedes_reporting() {
    let mut hello = Hello::new(env!("CARGO_PKG_VERSION"), 0).unwrap();
    hello.add_cmd_part("sql.raw_query").unwrap();
    let payload = hello.serialize().unwrap();

    // The collector side reconstructs the same capability list.
    let seen = Hello::load(&payload).unwrap();
    assert_eq!(seen.version().unwrap(), env!("CARGO_PKG_VERSION"));
    assert_eq!(seen.cmd_get(0).unwrap(), "sql.raw_query");
}

#[rstest]
#[case::empty_uuid(Trace::new(1000, "").err())]
#[case::empty_category(Trace::new(1000, "u").unwrap().start_span(1, "").err())]
#[case::empty_endpoint(Batch::new(0, None).set_endpoint_count("", 1).err())]
#[case::empty_version(Hello::new("", 0).err())]
fn required_fields_fail_as_invalid_argument(#[case] err: Option<Error>) {
    assert!(matches!(err, Some(Error::InvalidArgument(_))));
}
