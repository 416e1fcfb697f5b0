// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the pose similarity library

use std::io::Write;

use posematch::logging::is_verbose;
use posematch::{
    BodyPart, Dataset, Landmark, LandmarkSet, MatchConfig, PoseError, PoseRecord, ReferenceEntry,
    calculate_pose_similarity, extract_vectors, find_similar_poses, normalize, rank,
};

/// Standing figure, arms straight out to the sides.
const T_POSE: [(f64, f64); 33] = [
    (320.0, 80.0),
    (312.0, 70.0),
    (308.0, 70.0),
    (304.0, 70.0),
    (328.0, 70.0),
    (332.0, 70.0),
    (336.0, 70.0),
    (296.0, 76.0),
    (344.0, 76.0),
    (314.0, 94.0),
    (326.0, 94.0),
    (280.0, 140.0),
    (360.0, 140.0),
    (220.0, 140.0),
    (420.0, 140.0),
    (160.0, 140.0),
    (480.0, 140.0),
    (145.0, 136.0),
    (495.0, 136.0),
    (145.0, 146.0),
    (495.0, 146.0),
    (152.0, 132.0),
    (488.0, 132.0),
    (295.0, 300.0),
    (345.0, 300.0),
    (295.0, 400.0),
    (345.0, 400.0),
    (295.0, 500.0),
    (345.0, 500.0),
    (288.0, 515.0),
    (352.0, 515.0),
    (310.0, 520.0),
    (330.0, 520.0),
];

fn pose_from(points: &[(f64, f64)]) -> LandmarkSet {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Landmark::new(x, y, 1.0, i.to_string()))
        .collect()
}

fn t_pose() -> LandmarkSet {
    pose_from(&T_POSE)
}

/// Same figure with both arms hanging at the sides.
fn arms_down() -> LandmarkSet {
    let mut points = T_POSE;
    for (k, i) in [13, 15, 17, 19, 21].into_iter().enumerate() {
        points[i] = (275.0 - k as f64, 220.0 + 70.0 * k as f64);
        points[i + 1] = (365.0 + k as f64, 220.0 + 70.0 * k as f64);
    }
    pose_from(&points)
}

/// Same figure with the left leg kicked out to the side.
fn leg_raised() -> LandmarkSet {
    let mut points = T_POSE;
    points[25] = (220.0, 360.0);
    points[27] = (150.0, 420.0);
    points[29] = (130.0, 425.0);
    points[31] = (140.0, 440.0);
    pose_from(&points)
}

#[test]
fn test_normalize_public_api() {
    let normalized = normalize(&t_pose()).unwrap();
    let ls = normalized.get(11).unwrap();
    let rs = normalized.get(12).unwrap();
    let lh = normalized.get(23).unwrap();
    let rh = normalized.get(24).unwrap();

    let cx = f64::midpoint(ls.x, rs.x);
    let cy = f64::midpoint(ls.y, rs.y);
    assert!(cx.abs() < 1e-9 && cy.abs() < 1e-9);

    let hx = f64::midpoint(lh.x, rh.x);
    let hy = f64::midpoint(lh.y, rh.y);
    assert!(((hx - cx).hypot(hy - cy) - 100.0).abs() < 1e-9);
}

#[test]
fn test_normalize_rejects_bad_input() {
    let short = LandmarkSet::new(t_pose().as_slice()[..10].to_vec());
    assert!(matches!(
        normalize(&short),
        Err(PoseError::InsufficientKeypoints { found: 10, .. })
    ));

    let mut lms = t_pose().into_inner();
    lms[12].score = 0.3;
    assert!(matches!(
        normalize(&LandmarkSet::new(lms)),
        Err(PoseError::LowConfidenceCore { index: 12, .. })
    ));
}

#[test]
fn test_t_pose_scenario() {
    let query = t_pose();
    let dataset = vec![
        ReferenceEntry::new("arms_down.jpg", arms_down()),
        ReferenceEntry::new("t_pose.jpg", t_pose()),
    ];

    assert_eq!(find_similar_poses(&query, &dataset, 1), vec!["t_pose.jpg"]);
    assert!(
        calculate_pose_similarity(&query, &arms_down())
            < calculate_pose_similarity(&query, &t_pose())
    );
}

#[test]
fn test_self_match_ranks_first() {
    let query = leg_raised();
    let dataset = vec![
        ReferenceEntry::new("t_pose.jpg", t_pose()),
        ReferenceEntry::new("arms_down.jpg", arms_down()),
        ReferenceEntry::new("leg_raised.jpg", leg_raised()),
    ];

    let top = find_similar_poses(&query, &dataset, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0], "leg_raised.jpg");

    let all = rank(&query, &dataset, &MatchConfig::new().with_top_n(10));
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].score >= w[1].score));
    assert!((all[0].score - 1.0).abs() < 1e-9);
}

#[test]
fn test_similarity_symmetric_and_bounded() {
    let poses = [t_pose(), arms_down(), leg_raised()];
    for a in &poses {
        for b in &poses {
            let ab = calculate_pose_similarity(a, b);
            let ba = calculate_pose_similarity(b, a);
            assert!((ab - ba).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}

#[test]
fn test_invalid_pose_scores_zero() {
    assert!(!is_verbose(), "library must stay quiet unless a binary enables logging");
    let empty = LandmarkSet::default();
    assert!(calculate_pose_similarity(&t_pose(), &empty).abs() < f64::EPSILON);
}

#[test]
fn test_low_confidence_segment_excluded() {
    let mut lms = t_pose().into_inner();
    lms[15].score = 0.3;
    let pose = LandmarkSet::new(lms);

    // left arm chain 11-13-15-17-19-21: segments touching 15 drop out
    let vectors = extract_vectors(&pose, BodyPart::LeftArm.indices());
    assert_eq!(vectors.len(), 3);
    assert!((vectors[0].dx + 60.0).abs() < 1e-9);
}

#[test]
fn test_rank_from_dataset_file() {
    let to_json = |set: &LandmarkSet| serde_json::to_string(set).unwrap();
    let json = format!(
        r#"[
            {{"filename": "arms_down.jpg", "landmarks": {{"landmarks": {}}}}},
            {{"filename": "broken.jpg", "landmarks": {{"landmarks": []}}}},
            {{"filename": "t_pose.jpg", "keypoints": {{"keypoints": {}, "keypoints3D": []}}}}
        ]"#,
        to_json(&arms_down()),
        to_json(&t_pose())
    );
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let mut dataset = Dataset::load(file.path()).unwrap();
    assert_eq!(dataset.len(), 3);

    let query = PoseRecord::from_json_str(&format!(r#"{{"landmarks": {}}}"#, to_json(&t_pose())))
        .unwrap();
    let ranked = find_similar_poses(&query.landmarks, dataset.entries(), 3);
    assert_eq!(ranked, vec!["t_pose.jpg", "arms_down.jpg", "broken.jpg"]);

    assert_eq!(dataset.retain_valid(), 1);
    let ranked = find_similar_poses(&query.landmarks, dataset.entries(), 3);
    assert_eq!(ranked, vec!["t_pose.jpg", "arms_down.jpg"]);
}

#[test]
fn test_extreme_coordinates_score_in_range() {
    let mut points = T_POSE;
    points[13].0 = -1.5e308;
    points[15].0 = 1.5e308;
    let extreme = pose_from(&points);

    let score = calculate_pose_similarity(&t_pose(), &extreme);
    assert!((0.0..=1.0).contains(&score), "score {score} out of range");

    let dataset = vec![
        ReferenceEntry::new("extreme.jpg", extreme),
        ReferenceEntry::new("t_pose.jpg", t_pose()),
    ];
    assert_eq!(find_similar_poses(&t_pose(), &dataset, 1), vec!["t_pose.jpg"]);
}
