use std::sync::mpsc::channel;
use std::time::Duration;

use terrain_mesher::terrain::mesh::column_side_faces;
use terrain_mesher::transport::{decode_outbound, encode_result, parse_inbound};
use terrain_mesher::{BuildResult, GeometryBuffers, HeightSource, Lod, MesherWorker};

const WAIT: Duration = Duration::from_secs(10);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Заглушка: высота 10 и blend 0.5 везде
struct Constant;

impl HeightSource for Constant {
    fn height(&self, _x: i32, _z: i32) -> u32 {
        10
    }

    fn blend(&self, _x: i32, _z: i32) -> f32 {
        0.5
    }
}

fn build_once(message: &str) -> BuildResult {
    let (tx, rx) = channel();
    let worker = MesherWorker::spawn_with(0, tx, |_: &str| Constant).unwrap();
    assert!(worker.handle_message(message).unwrap());
    let result = rx.recv_timeout(WAIT).unwrap();
    drop(worker);
    result
}

#[test]
fn end_to_end_build_with_stub_height_field() {
    init_logging();
    let message = r#"{"type":"build","k":"abc","cx":0,"cz":0,"seed":"test-seed","lod":0}"#;

    let first = build_once(message);
    let second = build_once(message);

    assert_eq!(first.key, "abc");
    assert_eq!(first.lod, Lod::Full);
    assert!(first.is_ok());
    assert!(!first.positions.is_empty());

    // Побайтово одинаковые буферы
    let bytes = |v: &[f32]| bytemuck::cast_slice::<f32, u8>(v).to_vec();
    assert_eq!(bytes(&first.positions), bytes(&second.positions));
    assert_eq!(bytes(&first.normals), bytes(&second.normals));
    assert_eq!(bytes(&first.colors), bytes(&second.colors));

    // Плоский мир: только верхние грани, все нормали вверх
    assert_eq!(first.positions.len(), first.normals.len());
    assert_eq!(first.positions.len(), first.colors.len());
    assert_eq!(first.positions.len() % 9, 0);
    for normal in first.normals.chunks_exact(3) {
        assert_eq!(normal, [0.0, 1.0, 0.0]);
    }
    for position in first.positions.chunks_exact(3) {
        assert_eq!(position[1], 10.0);
    }
    // 16 рядов по одной полосе
    assert_eq!(first.vertex_count(), 16 * 6);
}

#[test]
fn encoded_result_round_trips_through_the_wire() {
    init_logging();
    let request = parse_inbound(r#"{"type":"build","k":"wire","cx":4,"cz":-1,"seed":"test-seed","lod":0}"#).unwrap();
    let result = terrain_mesher::transport::handle_request(&request);

    let message = decode_outbound(&encode_result(&result).unwrap()).unwrap();
    assert_eq!(message.k, "wire");
    assert_eq!(message.lod, Lod::Full);
    assert_eq!(message.into_result().unwrap(), result);
}

#[test]
fn unknown_message_produces_no_outbound_message() {
    init_logging();
    let (tx, rx) = channel::<BuildResult>();
    let worker = MesherWorker::spawn(0, tx).unwrap();
    assert!(!worker.handle_message(r#"{"type":"ping"}"#).unwrap());
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn side_faces_gated_by_equal_neighbors() {
    struct Five;

    impl HeightSource for Five {
        fn height(&self, _x: i32, _z: i32) -> u32 {
            5
        }

        fn blend(&self, _x: i32, _z: i32) -> f32 {
            0.5
        }
    }

    let mut out = GeometryBuffers::new();
    assert_eq!(column_side_faces(&Five, 7, 7, &mut out), 0);
    assert!(out.is_empty());
}

#[test]
fn every_lod_is_deterministic_and_consistent() {
    for (key, lod) in [("full", 0), ("medium", 1), ("low", 2)] {
        let message = format!(r#"{{"type":"build","k":"{key}","cx":-2,"cz":3,"seed":"test-seed","lod":{lod}}}"#);
        let request = parse_inbound(&message).unwrap();
        let a = terrain_mesher::transport::handle_request(&request);
        let b = terrain_mesher::transport::handle_request(&request);
        assert_eq!(a, b);
        assert_eq!(a.key, key);
        assert_eq!(a.positions.len(), a.normals.len());
        assert_eq!(a.positions.len(), a.colors.len());
        assert_eq!(a.positions.len() % 9, 0);
        assert!(a.colors.iter().all(|c| (0.0..=1.0).contains(c)));
        for n in a.normals.chunks_exact(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn far_chunk_is_answered_with_a_flagged_failure() {
    init_logging();
    let request = parse_inbound(r#"{"type":"build","k":"far","cx":268435456,"cz":0,"seed":"test-seed","lod":1}"#).unwrap();
    let result = terrain_mesher::transport::handle_request(&request);
    assert_eq!(result.key, "far");
    assert!(!result.is_ok());
    assert!(result.is_empty());

    let message = decode_outbound(&encode_result(&result).unwrap()).unwrap();
    assert!(message.is_error());
    assert!(message.positions.is_empty());
}
