//! Audit stream scenarios: every add/remove attempt is observable through
//! the broadcast bus, including duplicate adds and absent removes.

#[cfg(test)]
mod tests {
    use np_01_node_rules::{NodeRulesApi, NodeRulesEvent};

    use crate::integration::fixtures::{node1, rules_service, ADMIN, STRANGER};

    #[tokio::test]
    async fn test_add_attempts_are_audited_including_duplicates() {
        let (mut service, bus) = rules_service();
        let mut rx = bus.subscribe();

        service.add_enode(&ADMIN, node1()).unwrap();
        service.add_enode(&ADMIN, node1()).unwrap();

        assert_eq!(
            rx.recv().await.unwrap(),
            NodeRulesEvent::NodeAdded {
                enode: node1(),
                added: true
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            NodeRulesEvent::NodeAdded {
                enode: node1(),
                added: false
            }
        );
    }

    #[tokio::test]
    async fn test_remove_attempts_are_audited_symmetrically() {
        let (mut service, bus) = rules_service();
        service.add_enode(&ADMIN, node1()).unwrap();

        let mut rx = bus.subscribe();
        service.remove_enode(&ADMIN, &node1()).unwrap();
        service.remove_enode(&ADMIN, &node1()).unwrap();

        assert_eq!(
            rx.recv().await.unwrap(),
            NodeRulesEvent::NodeRemoved {
                enode: node1(),
                removed: true
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            NodeRulesEvent::NodeRemoved {
                enode: node1(),
                removed: false
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_calls_emit_nothing() {
        let (mut service, bus) = rules_service();
        let mut rx = bus.subscribe();

        let _ = service.add_enode(&STRANGER, node1());
        service.enter_read_only(&ADMIN).unwrap();
        let _ = service.add_enode(&ADMIN, node1());

        assert!(matches!(
            rx.try_recv(),
            Err(tokio::sync::broadcast::error::TryRecvError::Empty)
        ));
        assert_eq!(bus.events_published(), 0);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_see_the_same_stream() {
        let (mut service, bus) = rules_service();
        let mut ui_rx = bus.subscribe();
        let mut monitor_rx = bus.subscribe();

        service.add_enode(&ADMIN, node1()).unwrap();

        let expected = NodeRulesEvent::NodeAdded {
            enode: node1(),
            added: true,
        };
        assert_eq!(ui_rx.recv().await.unwrap(), expected);
        assert_eq!(monitor_rx.recv().await.unwrap(), expected);
    }
}
