use crate::mock::{testcontext, timeout_after_1s, Exchange};
use http::Method;
use kube::{
    api::{ListParams, PostParams},
    ResourceExt,
};
use riff_core::{
    build::{Function, FunctionSpec},
    streaming::{Stream, StreamSpec},
};
use serde_json::json;

#[tokio::test]
async fn functions_are_created_in_the_build_group() {
    let (clientset, fakeserver) = testcontext();
    let func = Function::new("square", FunctionSpec {
        image: "registry.example.com/square".into(),
        ..FunctionSpec::default()
    });
    let mut stored = serde_json::to_value(&func).unwrap();
    stored["metadata"]["namespace"] = json!("dev");
    let mocksrv = fakeserver.run(vec![Exchange::new(
        Method::POST,
        "/apis/build.projectriff.io/v1alpha1/namespaces/dev/functions",
        stored,
    )]);

    let created = clientset
        .build_v1alpha1()
        .functions("dev")
        .create(&PostParams::default(), &func)
        .await
        .unwrap();
    assert_eq!(created.name_any(), "square");
    assert_eq!(created.namespace().as_deref(), Some("dev"));
    let bodies = timeout_after_1s(mocksrv).await;
    assert_eq!(bodies[0]["spec"]["image"], "registry.example.com/square");
}

#[tokio::test]
async fn streams_are_listed_across_namespaces() {
    let (clientset, fakeserver) = testcontext();
    let stream = |name: &str| {
        Stream::new(name, StreamSpec {
            provider: "franz".into(),
            content_type: None,
        })
    };
    let list = json!({
        "kind": "StreamList",
        "apiVersion": "streaming.projectriff.io/v1alpha1",
        "metadata": { "resourceVersion": "1" },
        "items": [stream("letters"), stream("numbers")]
    });
    let mocksrv = fakeserver.run(vec![Exchange::new(
        Method::GET,
        "/apis/streaming.projectriff.io/v1alpha1/streams",
        list,
    )]);

    let streams = clientset
        .streaming_v1alpha1()
        .all_streams()
        .list(&ListParams::default())
        .await
        .unwrap();
    let names: Vec<_> = streams.iter().map(|s| s.name_any()).collect();
    assert_eq!(names, ["letters", "numbers"]);
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn request_processors_use_the_default_namespace() {
    let (clientset, fakeserver) = testcontext();
    let rp = json!({
        "apiVersion": "request.projectriff.io/v1alpha1",
        "kind": "RequestProcessor",
        "metadata": { "name": "echo", "namespace": "default" },
        "spec": [{ "name": "v1", "template": { "containers": [{ "name": "", "image": "busybox" }] } }]
    });
    let mocksrv = fakeserver.run(vec![Exchange::new(
        Method::GET,
        "/apis/request.projectriff.io/v1alpha1/namespaces/default/requestprocessors/echo",
        rp,
    )]);

    assert_eq!(clientset.default_namespace(), "default");
    let rp = clientset
        .request_v1alpha1()
        .request_processors(clientset.default_namespace())
        .get("echo")
        .await
        .unwrap();
    assert_eq!(rp.spec.len(), 1);
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn runtime_deployers_are_read_dynamically() {
    let (clientset, fakeserver) = testcontext();
    let deployer = |group: &str| {
        json!({
            "apiVersion": format!("{group}/v1alpha1"),
            "kind": "Deployer",
            "metadata": { "name": "square", "namespace": "dev" },
            "spec": { "build": { "functionRef": "square" } }
        })
    };
    let mocksrv = fakeserver.run(vec![
        Exchange::new(
            Method::GET,
            "/apis/core.projectriff.io/v1alpha1/namespaces/dev/deployers/square",
            deployer("core.projectriff.io"),
        ),
        Exchange::new(
            Method::GET,
            "/apis/knative.projectriff.io/v1alpha1/namespaces/dev/deployers/square",
            deployer("knative.projectriff.io"),
        ),
    ]);

    let core = clientset.core_v1alpha1().deployers("dev").get("square").await.unwrap();
    assert_eq!(core.types.unwrap().api_version, "core.projectriff.io/v1alpha1");
    assert_eq!(core.data["spec"]["build"]["functionRef"], "square");

    let knative = clientset.knative_v1alpha1().deployers("dev").get("square").await.unwrap();
    assert_eq!(knative.name_any(), "square");
    assert_eq!(knative.types.unwrap().api_version, "knative.projectriff.io/v1alpha1");
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn knative_adapters_are_listed_across_namespaces() {
    let (clientset, fakeserver) = testcontext();
    let list = json!({
        "kind": "AdapterList",
        "apiVersion": "knative.projectriff.io/v1alpha1",
        "metadata": {},
        "items": [{
            "apiVersion": "knative.projectriff.io/v1alpha1",
            "kind": "Adapter",
            "metadata": { "name": "petclinic", "namespace": "dev" },
            "spec": {}
        }]
    });
    let mocksrv = fakeserver.run(vec![Exchange::new(
        Method::GET,
        "/apis/knative.projectriff.io/v1alpha1/adapters",
        list,
    )]);

    let adapters = clientset
        .knative_v1alpha1()
        .all_adapters()
        .list(&ListParams::default())
        .await
        .unwrap();
    assert_eq!(adapters.items.len(), 1);
    assert_eq!(adapters.items[0].namespace().as_deref(), Some("dev"));
    timeout_after_1s(mocksrv).await;
}
