//! Whitelist lifecycle scenarios: admission answers, key derivation,
//! traversal order, and structural behavior across add/remove sequences.

#[cfg(test)]
mod tests {
    use np_01_node_rules::{
        ConnectionVerdict, EnodeId, NodeRulesApi, NodeRulesError, NOT_PERMITTED_RESPONSE,
        PERMITTED_RESPONSE,
    };

    use crate::integration::fixtures::{node1, node2, node3, rules_service, ADMIN};

    #[test]
    fn test_empty_whitelist_permits_no_node() {
        let (service, _) = rules_service();
        assert!(!service.enode_allowed(&node1()));
        assert_eq!(service.get_size(), 0);
        assert_eq!(service.get_head_enode(), Err(NodeRulesError::EmptyWhitelist));
    }

    #[test]
    fn test_remove_from_empty_whitelist_is_tolerated() {
        let (mut service, _) = rules_service();
        service.remove_enode(&ADMIN, &node3()).unwrap();
        assert!(!service.enode_allowed(&node3()));
        assert_eq!(service.get_size(), 0);
    }

    #[test]
    fn test_compute_key_is_stable_and_port_sensitive() {
        let (service, _) = rules_service();
        let key1 = service.compute_key(&node1());
        let key2 = service.compute_key(&node1());
        assert_eq!(key1, key2);

        let mut moved = node1();
        moved.port = node2().port;
        assert_ne!(service.compute_key(&moved), key1);
    }

    #[test]
    fn test_added_nodes_stay_permitted_as_list_grows() {
        let (mut service, _) = rules_service();

        assert!(service.add_enode(&ADMIN, node1()).unwrap());
        assert!(service.enode_allowed(&node1()));

        assert!(service.add_enode(&ADMIN, node2()).unwrap());
        assert!(service.enode_allowed(&node2()));
        assert!(service.enode_allowed(&node1()));

        assert!(service.add_enode(&ADMIN, node3()).unwrap());
        assert!(service.enode_allowed(&node3()));
        assert!(service.enode_allowed(&node1()));
        assert!(service.enode_allowed(&node2()));
        assert_eq!(service.get_size(), 3);
    }

    #[test]
    fn test_single_entry_head_self_loops() {
        let (mut service, _) = rules_service();
        service.add_enode(&ADMIN, node1()).unwrap();

        let head = service.get_head_enode().unwrap();
        assert_eq!(head.enode, node1());
        assert_eq!(head.next, head.prev);
        assert_eq!(head.next, service.compute_key(&node1()));
    }

    #[test]
    fn test_traversal_visits_every_node_exactly_once() {
        let (mut service, _) = rules_service();
        service.add_enode(&ADMIN, node1()).unwrap();
        service.add_enode(&ADMIN, node2()).unwrap();
        service.add_enode(&ADMIN, node3()).unwrap();

        let mut seen: Vec<EnodeId> = Vec::new();
        let head = service.get_head_enode().unwrap();
        let start = service.compute_key(&head.enode);
        seen.push(head.enode);

        let mut cursor = head.next;
        while cursor != start {
            let entry = service.get_enode(&cursor).unwrap();
            seen.push(entry.enode);
            cursor = entry.next;
        }

        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&node1()));
        assert!(seen.contains(&node2()));
        assert!(seen.contains(&node3()));
    }

    #[test]
    fn test_remove_interior_node_relinks_cycle() {
        let (mut service, _) = rules_service();
        service.add_enode(&ADMIN, node1()).unwrap();
        service.add_enode(&ADMIN, node2()).unwrap();
        service.add_enode(&ADMIN, node3()).unwrap();

        service.remove_enode(&ADMIN, &node2()).unwrap();
        assert_eq!(service.get_size(), 2);
        assert!(!service.enode_allowed(&node2()));

        let visited: Vec<EnodeId> = service
            .whitelist()
            .iter()
            .map(|(_, entry)| entry.enode)
            .collect();
        assert_eq!(visited, vec![node1(), node3()]);
    }

    #[test]
    fn test_remove_head_then_remove_rest() {
        let (mut service, _) = rules_service();
        service.add_enode(&ADMIN, node1()).unwrap();
        service.add_enode(&ADMIN, node2()).unwrap();

        // Removing the head advances it to the former successor.
        service.remove_enode(&ADMIN, &node1()).unwrap();
        let head = service.get_head_enode().unwrap();
        assert_eq!(head.enode, node2());
        assert_eq!(head.next, head.prev);

        service.remove_enode(&ADMIN, &node2()).unwrap();
        assert_eq!(service.get_size(), 0);
        assert_eq!(service.get_head_enode(), Err(NodeRulesError::EmptyWhitelist));
    }

    #[test]
    fn test_duplicate_add_does_not_change_size() {
        let (mut service, _) = rules_service();
        assert!(service.add_enode(&ADMIN, node1()).unwrap());
        let size = service.get_size();
        assert!(!service.add_enode(&ADMIN, node1()).unwrap());
        assert_eq!(service.get_size(), size);
    }

    #[test]
    fn test_connection_sentinels_track_membership() {
        let (mut service, _) = rules_service();
        service.add_enode(&ADMIN, node1()).unwrap();
        service.add_enode(&ADMIN, node2()).unwrap();

        assert_eq!(
            service.connection_allowed(&node1(), &node2()),
            ConnectionVerdict::Permitted
        );
        assert_eq!(
            service.connection_allowed_raw(&node1(), &node2()),
            PERMITTED_RESPONSE
        );

        service.remove_enode(&ADMIN, &node1()).unwrap();
        assert_eq!(
            service.connection_allowed_raw(&node1(), &node2()),
            NOT_PERMITTED_RESPONSE
        );
    }

    #[test]
    fn test_randomized_lifecycle_matches_reference_set() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};
        use std::collections::HashSet;

        let (mut service, _) = rules_service();
        let mut rng = StdRng::seed_from_u64(7);
        let pool: Vec<EnodeId> = (0u16..12)
            .map(|i| EnodeId::new([i as u8; 32], [0x40 + i as u8; 32], [0x11; 16], 20000 + i))
            .collect();
        let mut reference: HashSet<EnodeId> = HashSet::new();

        for _ in 0..500 {
            let enode = pool[rng.gen_range(0..pool.len())];
            if rng.gen_bool(0.5) {
                let added = service.add_enode(&ADMIN, enode).unwrap();
                assert_eq!(added, reference.insert(enode));
            } else {
                service.remove_enode(&ADMIN, &enode).unwrap();
                reference.remove(&enode);
            }

            assert_eq!(service.get_size(), reference.len());
            for candidate in &pool {
                assert_eq!(
                    service.enode_allowed(candidate),
                    reference.contains(candidate)
                );
            }
        }
    }
}
