use super::*;

const SAMPLE: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: pig-cluster
  cluster:
    server: http://pig.org:8080
- name: cow-cluster
  cluster:
    server: http://cow.org:8080
    certificate-authority-data: Y2E=
users:
- name: black-user
  user:
    token: black-token
- name: red-user
  user:
    client-certificate-data: Y2VydA==
    client-key-data: a2V5
contexts:
- name: root
  context:
    cluster: pig-cluster
    user: black-user
    namespace: saw-ns
- name: federal
  context:
    cluster: cow-cluster
    user: red-user
current-context: root
"#;

#[test]
fn parses_a_v1_document() {
    let kc: Kubeconfig = serde_yaml::from_str(SAMPLE).unwrap();
    assert_eq!(kc.api_version, "v1");
    assert_eq!(kc.kind, "Config");
    assert_eq!(kc.clusters.len(), 2);
    assert_eq!(kc.users.len(), 2);
    assert_eq!(kc.contexts.len(), 2);
    assert_eq!(kc.current_context.as_deref(), Some("root"));
    assert_eq!(kc.clusters[1].cluster.certificate_authority_data.as_deref(), Some("Y2E="));
}

#[test]
fn missing_sections_default_to_empty() {
    let kc: Kubeconfig = serde_yaml::from_str("apiVersion: v1\nkind: Config\n").unwrap();
    assert!(kc.clusters.is_empty());
    assert!(kc.users.is_empty());
    assert!(kc.contexts.is_empty());
    assert!(kc.current_context.is_none());
}

#[test]
fn converts_to_the_map_form_and_back() {
    let kc: Kubeconfig = serde_yaml::from_str(SAMPLE).unwrap();
    let config = Config::from(kc);

    assert_eq!(config.clusters["pig-cluster"].server, "http://pig.org:8080");
    assert_eq!(config.users["black-user"].token.as_deref(), Some("black-token"));
    assert_eq!(config.contexts["federal"].namespace, "");
    assert_eq!(config.current_context.as_deref(), Some("root"));

    let back = Kubeconfig::from(config.clone());
    assert_eq!(Config::from(back), config);
}

#[test]
fn first_occurrence_wins_on_duplicate_names() {
    let doc = r#"
clusters:
- name: dup
  cluster:
    server: http://first:8080
- name: dup
  cluster:
    server: http://second:8080
"#;
    let kc: Kubeconfig = serde_yaml::from_str(doc).unwrap();
    let config = Config::from(kc);
    assert_eq!(config.clusters.len(), 1);
    assert_eq!(config.clusters["dup"].server, "http://first:8080");
}

#[test]
fn exec_credentials_survive_a_rewrite() {
    let doc = r#"
apiVersion: v1
kind: Config
preferences:
  colors: true
clusters:
- name: file-ca
  cluster:
    server: https://example:6443
    certificate-authority: /etc/kubernetes/ca.crt
users:
- name: aws-user
  user:
    exec:
      apiVersion: client.authentication.k8s.io/v1beta1
      command: aws
      args:
      - eks
      - get-token
contexts:
- name: dev
  context:
    cluster: file-ca
    user: aws-user
    extensions:
    - name: workspace
current-context: dev
extensions:
- name: top-level
"#;
    let kc: Kubeconfig = serde_yaml::from_str(doc).unwrap();
    let config = Config::from(kc);
    assert!(config.users["aws-user"].extra.contains_key("exec"));
    assert!(config.clusters["file-ca"].extra.contains_key("certificate-authority"));

    let yaml = serde_yaml::to_string(&Kubeconfig::from(config)).unwrap();
    assert!(yaml.contains("command: aws"), "exec credential dropped on rewrite");
    assert!(yaml.contains("get-token"));
    assert!(yaml.contains("certificate-authority: /etc/kubernetes/ca.crt"));
    assert!(yaml.contains("colors: true"));
    assert!(yaml.contains("name: workspace"));
    assert!(yaml.contains("name: top-level"));
}

#[test]
fn round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config");

    let kc: Kubeconfig = serde_yaml::from_str(SAMPLE).unwrap();
    kc.write_to(&path).unwrap();
    let loaded = Kubeconfig::read_from(&path).unwrap();

    assert_eq!(Config::from(loaded), Config::from(serde_yaml::from_str::<Kubeconfig>(SAMPLE).unwrap()));
}

#[test]
fn read_from_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Kubeconfig::read_from(&dir.path().join("absent")).is_err());
}

#[test]
fn default_document_serializes_with_version_and_kind() {
    let yaml = serde_yaml::to_string(&Kubeconfig::default()).unwrap();
    assert!(yaml.contains("apiVersion: v1"));
    assert!(yaml.contains("kind: Config"));
    assert!(!yaml.contains("current-context"));
}
